//! HTTP handlers for the split endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::bad_request;
use crate::application::handlers::{CalculateSplitCommand, CalculateSplitHandler};
use crate::domain::foundation::ValidationError;
use crate::domain::split::{render_summary, CurrencyFormat};

use super::dto::{CalculateQuery, CalculateRequest, CalculateResponse, ResponseFormat};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SplitAppState {
    calculate_handler: Arc<CalculateSplitHandler>,
    currency: Arc<CurrencyFormat>,
}

impl SplitAppState {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self {
            calculate_handler: Arc::new(CalculateSplitHandler::new()),
            currency: Arc::new(currency),
        }
    }
}

impl Default for SplitAppState {
    fn default() -> Self {
        Self::new(CurrencyFormat::default())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /calculate - Split a fare among participants
///
/// `?format=summary` returns the plain-text summary instead of JSON.
pub async fn calculate(
    State(state): State<SplitAppState>,
    query: Result<Query<CalculateQuery>, QueryRejection>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return bad_request(format!("Invalid query: {}", rejection.body_text()));
        }
    };

    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            return bad_request(format!("Invalid request body: {}", rejection.body_text()));
        }
    };

    let cmd = CalculateSplitCommand {
        request: req.into(),
    };

    match state.calculate_handler.handle(cmd) {
        Ok(allocation) => match query.format {
            ResponseFormat::Json => {
                let response: CalculateResponse = allocation.into();
                (StatusCode::OK, Json(response)).into_response()
            }
            ResponseFormat::Summary => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                render_summary(&allocation, &state.currency),
            )
                .into_response(),
        },
        Err(e) => handle_split_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_split_error(error: ValidationError) -> Response {
    bad_request(error.to_string())
}
