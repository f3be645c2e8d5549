//! Split command handlers.

mod calculate_split;

pub use calculate_split::{CalculateSplitCommand, CalculateSplitHandler, CalculateSplitResult};
