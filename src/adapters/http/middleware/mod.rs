//! HTTP middleware for axum.
//!
//! This module contains layers for cross-cutting concerns:
//!
//! - `cors` - Origin policy from configuration
//! - `security_headers` - Response hardening headers

pub mod cors;
pub mod security_headers;

pub use cors::cors_layer;
pub use security_headers::with_security_headers;
