//! Liveness endpoint.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::error::not_found;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Router exposing `GET /health`, usable with any state.
pub fn health_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health).fallback(not_found))
}
