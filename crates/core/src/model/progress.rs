use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::DayStatus;

/// Result of a freeze toggle.
///
/// Rejection over quota is not an error; callers are expected to disable the
/// action up front and may ignore this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeOutcome {
    Frozen,
    Unfrozen,
    QuotaReached,
}

impl FreezeOutcome {
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, FreezeOutcome::QuotaReached)
    }
}

/// Learned and frozen days of a single goal.
///
/// The two sets never share a day. Days are kept ordered so iteration and
/// quota trimming are deterministic. Only `GoalTracker` mutates it, so the
/// freeze limit always comes from the goal's duration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProgressState {
    learned: BTreeSet<NaiveDate>,
    frozen: BTreeSet<NaiveDate>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self, day: NaiveDate) -> DayStatus {
        if self.learned.contains(&day) {
            DayStatus::Learned
        } else if self.frozen.contains(&day) {
            DayStatus::Frozen
        } else {
            DayStatus::Unset
        }
    }

    /// Un-logs a learned day, otherwise logs it as learned.
    ///
    /// Learning a frozen day takes it out of the frozen set.
    pub(crate) fn toggle_learned(&mut self, day: NaiveDate) -> DayStatus {
        if self.learned.remove(&day) {
            return DayStatus::Unset;
        }
        self.frozen.remove(&day);
        self.learned.insert(day);
        DayStatus::Learned
    }

    /// Un-freezes a frozen day, otherwise freezes it when fewer than
    /// `freeze_limit` days are frozen.
    pub(crate) fn toggle_frozen(&mut self, day: NaiveDate, freeze_limit: usize) -> FreezeOutcome {
        if self.frozen.remove(&day) {
            return FreezeOutcome::Unfrozen;
        }
        if self.frozen.len() >= freeze_limit {
            return FreezeOutcome::QuotaReached;
        }
        self.learned.remove(&day);
        self.frozen.insert(day);
        FreezeOutcome::Frozen
    }

    /// Releases the latest frozen days until at most `freeze_limit` remain.
    ///
    /// Returns the released days in ascending order.
    pub(crate) fn release_frozen_over(&mut self, freeze_limit: usize) -> Vec<NaiveDate> {
        let mut released = Vec::new();
        while self.frozen.len() > freeze_limit {
            match self.frozen.pop_last() {
                Some(day) => released.push(day),
                None => break,
            }
        }
        released.reverse();
        released
    }

    pub(crate) fn clear(&mut self) {
        self.learned.clear();
        self.frozen.clear();
    }

    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    #[must_use]
    pub fn frozen_count(&self) -> usize {
        self.frozen.len()
    }

    /// Learned plus frozen days.
    #[must_use]
    pub fn logged_count(&self) -> usize {
        self.learned.len() + self.frozen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.learned.is_empty() && self.frozen.is_empty()
    }

    pub fn learned_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.learned.iter().copied()
    }

    pub fn frozen_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.frozen.iter().copied()
    }
}
