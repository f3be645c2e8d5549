//! HTTP DTOs for the split endpoint.
//!
//! These types decouple the HTTP API from domain types. The request side
//! accepts any JSON object: missing or mistyped fields still reach the
//! allocator, so validation failures are reported in one place and in one
//! order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::split::{
    Allocation, AllocationRequest, ParticipantInput, ParticipantShare, ParticipantValue,
    SplitMode,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to split a fare.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub total: Value,
    #[serde(default)]
    pub mode: Value,
    /// Expected to be an array of `{ name, value }` objects.
    #[serde(default)]
    pub participants: Value,
}

impl From<CalculateRequest> for AllocationRequest {
    fn from(req: CalculateRequest) -> Self {
        // Only JSON numbers count as a total; anything else fails validation.
        let total = req.total.as_f64().unwrap_or(f64::NAN);
        let mode = match req.mode {
            Value::String(mode) => mode,
            other => other.to_string(),
        };
        // A non-array counts as no participants and fails the count check.
        let participants = match req.participants {
            Value::Array(items) => items.into_iter().map(participant_from_json).collect(),
            _ => Vec::new(),
        };

        AllocationRequest::new(total, mode, participants)
    }
}

/// Reads one participant entry. Non-string names count as blank.
fn participant_from_json(mut item: Value) -> ParticipantInput {
    let name = match item.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => String::new(),
    };
    let value = item
        .get_mut("value")
        .map(Value::take)
        .map(ParticipantValue::from)
        .unwrap_or_default();

    ParticipantInput { name, value }
}

impl From<Value> for ParticipantValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ParticipantValue::Missing,
            Value::Number(n) => n
                .as_f64()
                .map(ParticipantValue::Number)
                .unwrap_or(ParticipantValue::Unsupported),
            Value::String(text) => ParticipantValue::Text(text),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => ParticipantValue::Unsupported,
        }
    }
}

/// Query parameters for the split endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuery {
    #[serde(default)]
    pub format: ResponseFormat,
}

/// Representation of a successful split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    /// Plain-text summary for copying into a chat.
    Summary,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub total: i64,
    pub mode: SplitMode,
    pub results: Vec<ParticipantResultResponse>,
    pub sum_pay: i64,
}

/// One participant's line in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResultResponse {
    pub name: String,
    pub value: f64,
    pub share: f64,
    pub pay: i64,
}

impl From<ParticipantShare> for ParticipantResultResponse {
    fn from(result: ParticipantShare) -> Self {
        Self {
            name: result.name,
            value: result.value,
            share: result.share.as_fraction(),
            pay: result.pay,
        }
    }
}

impl From<Allocation> for CalculateResponse {
    fn from(allocation: Allocation) -> Self {
        Self {
            total: allocation.total,
            mode: allocation.mode,
            results: allocation.results.into_iter().map(Into::into).collect(),
            sum_pay: allocation.sum_pay,
        }
    }
}
