//! Experience-level classification from position history.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "entry" => Some(Self::Entry),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    fn rank(self) -> i8 {
        match self {
            Self::Entry => 0,
            Self::Mid => 1,
            Self::Senior => 2,
        }
    }

    /// One step apart on the entry → mid → senior ladder.
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.rank() - other.rank()).abs() == 1
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
        })
    }
}

/// Classifies by number of prior positions. Missing history is `Mid` so
/// candidates without history data are not excluded by level filters.
pub fn classify_experience<T>(history: Option<&[T]>) -> ExperienceLevel {
    match history.map(<[T]>::len) {
        None => ExperienceLevel::Mid,
        Some(n) if n >= 5 => ExperienceLevel::Senior,
        Some(n) if n >= 2 => ExperienceLevel::Mid,
        Some(_) => ExperienceLevel::Entry,
    }
}

/// Human-readable experience summary, e.g. "3 positions".
pub fn describe_experience<T>(history: Option<&[T]>) -> String {
    match history.map(<[T]>::len) {
        None => "Experience not specified".to_string(),
        Some(1) => "1 position".to_string(),
        Some(n) => format!("{n} positions"),
    }
}
