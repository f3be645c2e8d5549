//! Participant input as supplied by the caller.

/// Prefix for names generated when a participant leaves the name blank.
pub const DEFAULT_NAME_PREFIX: &str = "Participant";

/// The raw value a participant supplied (distance or individual price).
///
/// Form-driven clients send either numbers or the text typed into a field,
/// so both are accepted and parsed during validation. Anything else is kept
/// as `Unsupported` and only rejected when the mode needs a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParticipantValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Unsupported,
}

impl ParticipantValue {
    /// Returns the numeric value if it is finite and strictly positive.
    ///
    /// Text is trimmed before parsing. Blank text, non-numeric text and
    /// non-finite results all yield `None`.
    pub fn positive(&self) -> Option<f64> {
        let value = match self {
            ParticipantValue::Number(n) => *n,
            ParticipantValue::Text(s) => s.trim().parse::<f64>().ok()?,
            ParticipantValue::Missing | ParticipantValue::Unsupported => return None,
        };
        (value.is_finite() && value > 0.0).then_some(value)
    }
}

impl From<f64> for ParticipantValue {
    fn from(value: f64) -> Self {
        ParticipantValue::Number(value)
    }
}

impl From<&str> for ParticipantValue {
    fn from(value: &str) -> Self {
        ParticipantValue::Text(value.to_string())
    }
}

/// One participant in an allocation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticipantInput {
    pub name: String,
    pub value: ParticipantValue,
}

impl ParticipantInput {
    /// Creates a participant with a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<ParticipantValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Resolves the display name for the participant at zero-based `index`.
    ///
    /// Returns the trimmed name, or `"Participant {index + 1}"` when blank.
    pub fn resolved_name(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("{} {}", DEFAULT_NAME_PREFIX, index + 1)
        } else {
            trimmed.to_string()
        }
    }
}
