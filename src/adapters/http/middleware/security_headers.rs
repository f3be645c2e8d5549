//! Hardening headers added to every response.

use axum::Router;
use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Adds `x-content-type-options`, `x-frame-options` and `referrer-policy`.
///
/// Existing values set by a handler are overwritten.
pub fn with_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
