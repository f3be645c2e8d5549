//! Application router: routes, fallback and middleware stack.

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::error::not_found;
use super::health::health_router;
use super::middleware::{cors_layer, with_security_headers};
use super::split::{split_router, SplitAppState};
use crate::config::ServerConfig;

/// Build the complete application router.
///
/// Routes are served both at the root and under `/api`:
/// - `POST /calculate`, `POST /api/calculate`
/// - `GET /health`, `GET /api/health`
///
/// Unmatched paths get the JSON 404, or the static bundle when
/// `server.static_dir` is set.
pub fn app_router(state: SplitAppState, server: &ServerConfig) -> Router {
    let routes = split_router().merge(health_router::<SplitAppState>());

    let router = Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .with_state(state);

    let router = match server.static_dir() {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.fallback(not_found),
    };

    with_security_headers(router).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer(server))
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            ))),
    )
}
