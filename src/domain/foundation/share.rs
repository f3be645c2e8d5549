//! Share value object (fraction of a total).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant's fractional portion of a total.
///
/// Produced by the allocator as `part / whole`, so it lies in (0, 1] for any
/// valid allocation. The raw fraction is kept; it is never re-derived from a
/// rounded payment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(f64);

impl Share {
    /// The whole total.
    pub const WHOLE: Self = Self(1.0);

    /// Creates the share `part / whole`.
    pub fn of(part: f64, whole: f64) -> Self {
        Self(part / whole)
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0
    }

    /// Returns the value on a 0 to 100 scale.
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}
