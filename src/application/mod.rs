//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations on behalf of the adapters.

pub mod handlers;

pub use handlers::{CalculateSplitCommand, CalculateSplitHandler, CalculateSplitResult};
