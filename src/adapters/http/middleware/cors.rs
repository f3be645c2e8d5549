//! CORS policy built from server configuration.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;

/// Builds the CORS layer.
///
/// With no configured origins, or a `*` entry, any origin is allowed.
/// Otherwise only the listed origins may call `GET` and `POST`.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let configured = server.cors_origins_list();
    if configured.is_empty() || configured.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
