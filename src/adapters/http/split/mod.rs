//! Split HTTP adapter - REST API for fare allocation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::SplitAppState;
pub use routes::split_router;
