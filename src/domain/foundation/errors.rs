//! Error types for the domain layer.

use thiserror::Error;

/// Reasons an allocation request is rejected.
///
/// Every variant is a caller-input error. The HTTP boundary reports the
/// message verbatim and does not distinguish variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Total must be a positive number")]
    InvalidTotal,

    #[error("Total must be less than 2^63")]
    TotalTooLarge,

    #[error("Participants must be a list with {min} to {max} items, got {actual}")]
    ParticipantCount { min: usize, max: usize, actual: usize },

    #[error("Mode must be distance, individual_price, or equal, got '{mode}'")]
    UnknownMode { mode: String },

    #[error("Participant '{name}' must have a positive numeric value")]
    InvalidParticipantValue { index: usize, name: String },

    #[error("Sum of participant values must be greater than zero")]
    NonPositiveDenominator,

    #[error("Participant values are outside the range that can be split")]
    ValuesOutOfRange,
}

impl ValidationError {
    /// Creates a participant count error.
    pub fn participant_count(min: usize, max: usize, actual: usize) -> Self {
        ValidationError::ParticipantCount { min, max, actual }
    }

    /// Creates an unknown mode error.
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        ValidationError::UnknownMode { mode: mode.into() }
    }

    /// Creates a per-participant value error. `index` is zero-based.
    pub fn invalid_participant_value(index: usize, name: impl Into<String>) -> Self {
        ValidationError::InvalidParticipantValue {
            index,
            name: name.into(),
        }
    }

    /// Stable machine-readable code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidTotal => "INVALID_TOTAL",
            ValidationError::TotalTooLarge => "TOTAL_TOO_LARGE",
            ValidationError::ParticipantCount { .. } => "PARTICIPANT_COUNT",
            ValidationError::UnknownMode { .. } => "UNKNOWN_MODE",
            ValidationError::InvalidParticipantValue { .. } => "INVALID_PARTICIPANT_VALUE",
            ValidationError::NonPositiveDenominator => "NON_POSITIVE_DENOMINATOR",
            ValidationError::ValuesOutOfRange => "VALUES_OUT_OF_RANGE",
        }
    }
}
