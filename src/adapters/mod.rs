//! Adapters - Connect the domain to the outside world.
//!
//! - `http` - axum REST API

pub mod http;
