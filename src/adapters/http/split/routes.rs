//! Axum router configuration for the split endpoint.

use axum::{routing::post, Router};

use super::handlers::{calculate, SplitAppState};
use crate::adapters::http::error::not_found;

/// Create the split API router.
///
/// # Routes
///
/// - `POST /calculate` - Split a fare (query: format)
///
/// Other methods on `/calculate` fall through to the JSON 404.
pub fn split_router() -> Router<SplitAppState> {
    Router::new().route("/calculate", post(calculate).fallback(not_found))
}
