use chrono::NaiveDate;
use serde::Serialize;

use journey_core::{DayStatus, GoalDuration};

/// Snapshot of the activity screen, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub topic: String,
    pub duration: GoalDuration,
    pub learned: usize,
    pub frozen: usize,
    pub freeze_limit: usize,
    pub freezes_remaining: usize,
    pub can_freeze: bool,
    pub target_days: usize,
    pub is_complete: bool,
    pub selected_day: NaiveDate,
    pub selected_status: DayStatus,
}

impl ActivitySummary {
    /// Label under the freeze button, e.g. `1 out of 2 Freezes used`.
    #[must_use]
    pub fn freezes_label(&self) -> String {
        format!("{} out of {} Freezes used", self.frozen, self.freeze_limit)
    }
}
