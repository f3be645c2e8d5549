//! Split mode - how a total is divided among participants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Allocation strategy for a fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Pay proportional to distance travelled.
    Distance,
    /// Pay proportional to each participant's own quoted price.
    IndividualPrice,
    /// Everyone pays the same.
    Equal,
}

impl SplitMode {
    /// All modes in display order.
    pub const ALL: [SplitMode; 3] = [
        SplitMode::Distance,
        SplitMode::IndividualPrice,
        SplitMode::Equal,
    ];

    /// Returns the wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Distance => "distance",
            SplitMode::IndividualPrice => "individual_price",
            SplitMode::Equal => "equal",
        }
    }

    /// Returns the display label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            SplitMode::Distance => "By distance",
            SplitMode::IndividualPrice => "By individual price",
            SplitMode::Equal => "Split equally",
        }
    }

    /// Returns true if pays are proportional to participant values.
    pub fn is_proportional(&self) -> bool {
        !matches!(self, SplitMode::Equal)
    }
}

impl FromStr for SplitMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplitMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_mode(s))
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
