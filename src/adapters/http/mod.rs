//! HTTP adapters - REST API implementations.
//!
//! - `split` - Fare allocation endpoint
//! - `health` - Liveness endpoint
//! - `middleware` - CORS and response hardening
//! - `router` - Assembles everything into the application router

pub mod error;
pub mod health;
pub mod middleware;
pub mod router;
pub mod split;

// Re-export key types for convenience
pub use error::ErrorResponse;
pub use router::app_router;
pub use split::{split_router, CalculateResponse, SplitAppState};
