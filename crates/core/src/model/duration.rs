use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown goal duration: {raw} (expected week, month or year)")]
pub struct ParseDurationError {
    raw: String,
}

impl ParseDurationError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

//
// ─── DURATION ──────────────────────────────────────────────────────────────────
//

/// Target window of a learning goal.
///
/// Each window fixes how many days must be logged to finish the goal and how
/// many of those days may be frozen instead of learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDuration {
    #[default]
    Week,
    Month,
    Year,
}

impl GoalDuration {
    pub const ALL: [GoalDuration; 3] = [GoalDuration::Week, GoalDuration::Month, GoalDuration::Year];

    /// Maximum number of frozen days allowed while the goal runs.
    #[must_use]
    pub fn freeze_limit(self) -> usize {
        match self {
            GoalDuration::Week => 2,
            GoalDuration::Month => 8,
            GoalDuration::Year => 96,
        }
    }

    /// Number of logged days (learned + frozen) that completes the goal.
    #[must_use]
    pub fn target_days(self) -> usize {
        match self {
            GoalDuration::Week => 7,
            GoalDuration::Month => 30,
            GoalDuration::Year => 365,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GoalDuration::Week => "week",
            GoalDuration::Month => "month",
            GoalDuration::Year => "year",
        }
    }

    /// Capitalized label for pickers.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GoalDuration::Week => "Week",
            GoalDuration::Month => "Month",
            GoalDuration::Year => "Year",
        }
    }
}

impl fmt::Display for GoalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(GoalDuration::Week),
            "month" => Ok(GoalDuration::Month),
            "year" => Ok(GoalDuration::Year),
            _ => Err(ParseDurationError { raw: s.to_owned() }),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
