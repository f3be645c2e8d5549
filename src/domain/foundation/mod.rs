//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the fare splitting domain.

mod errors;
mod share;

pub use errors::ValidationError;
pub use share::Share;
