//! Review score - an integer rating from one to five stars

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Rating attached to a post, always within `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Score(u8);

impl Score {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    /// Create a score, rejecting anything outside `1..=5`
    pub fn new(value: i16) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidScore(value))
        }
    }

    #[inline]
    pub fn value(self) -> i16 {
        i16::from(self.0)
    }

    /// Display label: one star glyph per point
    pub fn label(self) -> String {
        "★".repeat(usize::from(self.0))
    }

    /// All valid scores with their labels, lowest first
    pub fn choices() -> impl Iterator<Item = (Score, String)> {
        (Self::MIN..=Self::MAX).map(|v| {
            let score = Score(v as u8);
            (score, score.label())
        })
    }
}

impl TryFrom<i16> for Score {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i16 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
