//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod split;

pub use split::{CalculateSplitCommand, CalculateSplitHandler, CalculateSplitResult};
