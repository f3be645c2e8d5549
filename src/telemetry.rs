//! Tracing subscriber setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `server.log_level` when set. Production emits JSON
/// lines; other environments emit human-readable text.
///
/// # Errors
///
/// Returns `TryInitError` if a global subscriber is already installed.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TryInitError> {
    let filter = build_filter(server);
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    }
}

fn build_filter(server: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
