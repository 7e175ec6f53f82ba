use chrono::{Duration, FixedOffset, NaiveDate, Weekday};
use tracing::{debug, info, warn};

use journey_core::{Clock, DayStatus, FreezeOutcome, Goal, GoalDuration, GoalTracker, IntoDay};

use super::edit_flow::EditFlow;
use super::summary::ActivitySummary;
use crate::calendar::{MonthGrid, WeekStrip, shift_months};
use crate::config::JourneyConfig;
use crate::error::EditFlowError;

//
// ─── LOG OUTCOME ───────────────────────────────────────────────────────────────
//

/// Result of logging the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOutcome {
    pub day: NaiveDate,
    pub status: DayStatus,
    /// The freeze quota was already used up; nothing changed.
    pub rejected: bool,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory controller for the activity screen.
///
/// Owns the goal tracker for the active goal plus the selected day and the
/// edit-goal flow. The host UI polls [`ActivitySession::summary`] and the
/// calendar views after each action.
#[derive(Debug, Clone)]
pub struct ActivitySession {
    tracker: GoalTracker,
    clock: Clock,
    selected_day: NaiveDate,
    first_weekday: Weekday,
    edit_flow: EditFlow,
}

impl ActivitySession {
    /// Starts a session for `goal` with today, in the clock's zone, selected
    /// and no progress.
    #[must_use]
    pub fn new(goal: Goal, clock: Clock) -> Self {
        info!(topic = goal.topic(), duration = %goal.duration(), "starting learning goal");
        Self {
            tracker: GoalTracker::new(goal),
            selected_day: clock.today(),
            clock,
            first_weekday: Weekday::Sun,
            edit_flow: EditFlow::Idle,
        }
    }

    /// Applies the configured goal, first weekday and UTC offset.
    #[must_use]
    pub fn from_config(config: &JourneyConfig, clock: Clock) -> Self {
        let session = Self::new(config.goal(), clock).with_first_weekday(config.first_weekday);
        match config.utc_offset {
            Some(offset) => session.with_utc_offset(offset),
            None => session,
        }
    }

    #[must_use]
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// Reads the clock at `offset` and reselects today in that zone.
    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.clock = self.clock.with_offset(offset);
        self.select_today();
        self
    }

    // Accessors
    #[must_use]
    pub fn tracker(&self) -> &GoalTracker {
        &self.tracker
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    #[must_use]
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    #[must_use]
    pub fn edit_flow(&self) -> EditFlow {
        self.edit_flow
    }

    //
    // ─── SELECTION ─────────────────────────────────────────────────────────────
    //

    pub fn select_day(&mut self, day: impl IntoDay) {
        self.selected_day = day.into_day();
    }

    pub fn select_today(&mut self) {
        self.selected_day = self.clock.today();
    }

    /// Moves the selection by whole weeks. Out-of-range moves are ignored.
    pub fn shift_week(&mut self, weeks: i32) {
        if let Some(day) = self
            .selected_day
            .checked_add_signed(Duration::weeks(i64::from(weeks)))
        {
            self.selected_day = day;
        }
    }

    /// Moves the selection by calendar months, clamping to month end.
    pub fn shift_month(&mut self, months: i32) {
        if let Some(day) = shift_months(self.selected_day, months) {
            self.selected_day = day;
        }
    }

    //
    // ─── LOGGING ───────────────────────────────────────────────────────────────
    //

    /// Toggles the selected day as learned.
    pub fn log_learned(&mut self) -> LogOutcome {
        let day = self.selected_day;
        let was_complete = self.tracker.is_complete();
        let status = self.tracker.toggle_learned(day);
        debug!(%day, ?status, "toggled learned");
        self.finish_log(day, status, false, was_complete)
    }

    /// Toggles the selected day as frozen. Over quota nothing changes.
    pub fn log_frozen(&mut self) -> LogOutcome {
        let day = self.selected_day;
        let was_complete = self.tracker.is_complete();
        let outcome = self.tracker.toggle_frozen(day);
        if outcome == FreezeOutcome::QuotaReached {
            warn!(
                %day,
                freeze_limit = self.tracker.freeze_limit(),
                "freeze rejected, quota used up"
            );
        } else {
            debug!(%day, ?outcome, "toggled frozen");
        }
        let status = self.tracker.status(day);
        self.finish_log(day, status, outcome.is_rejected(), was_complete)
    }

    fn finish_log(
        &self,
        day: NaiveDate,
        status: DayStatus,
        rejected: bool,
        was_complete: bool,
    ) -> LogOutcome {
        let is_complete = self.tracker.is_complete();
        if is_complete != was_complete {
            let summary = self.tracker.summary();
            info!(
                topic = self.tracker.topic(),
                learned = summary.learned,
                frozen = summary.frozen,
                target_days = summary.target_days,
                is_complete,
                "goal completion changed"
            );
        }
        LogOutcome {
            day,
            status,
            rejected,
            is_complete,
        }
    }

    //
    // ─── GOAL COMPLETED ────────────────────────────────────────────────────────
    //

    /// Starts the same goal and duration over from zero.
    pub fn restart_same_goal(&mut self) {
        self.tracker.reset_progress();
        info!(
            topic = self.tracker.topic(),
            duration = %self.tracker.duration(),
            "restarted goal"
        );
    }

    /// Opens the goal editor from the completed screen; saving resets progress.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError` if another edit is in progress.
    pub fn set_new_goal(&mut self) -> Result<(), EditFlowError> {
        self.edit_flow.open_editor()
    }

    //
    // ─── EDIT GOAL ─────────────────────────────────────────────────────────────
    //

    /// Shows the warning that updating the goal starts the streak over.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError` if an edit is already pending.
    pub fn request_edit(&mut self) -> Result<(), EditFlowError> {
        self.edit_flow.request()
    }

    /// Closes the warning without editing.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError::NotRequested` if no warning is shown.
    pub fn dismiss_edit(&mut self) -> Result<(), EditFlowError> {
        self.edit_flow.dismiss()
    }

    /// Accepts the warning and opens the editor; saving will reset progress.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError::NotRequested` if no warning is shown.
    pub fn confirm_edit(&mut self) -> Result<(), EditFlowError> {
        self.edit_flow.confirm()
    }

    /// Leaves the editor without touching the goal.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError` if the editor is not open.
    pub fn cancel_edit(&mut self) -> Result<(), EditFlowError> {
        self.edit_flow.close_editor()
    }

    /// Applies the edited goal, clears all progress and closes the editor.
    ///
    /// # Errors
    ///
    /// Returns `EditFlowError` if the editor is not open.
    pub fn save_goal(
        &mut self,
        topic: impl Into<String>,
        duration: GoalDuration,
    ) -> Result<(), EditFlowError> {
        self.edit_flow.close_editor()?;
        self.tracker.change_goal(topic, duration, true);
        info!(
            topic = self.tracker.topic(),
            duration = %duration,
            "goal updated, progress reset"
        );
        Ok(())
    }

    //
    // ─── VIEWS ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn summary(&self) -> ActivitySummary {
        let progress = self.tracker.summary();
        ActivitySummary {
            topic: self.tracker.topic().to_owned(),
            duration: self.tracker.duration(),
            learned: progress.learned,
            frozen: progress.frozen,
            freeze_limit: progress.freeze_limit,
            freezes_remaining: progress.freezes_remaining(),
            can_freeze: self.tracker.can_freeze(),
            target_days: progress.target_days,
            is_complete: progress.is_complete,
            selected_day: self.selected_day,
            selected_status: self.tracker.status(self.selected_day),
        }
    }

    /// Week containing the selected day. `None` when that week runs past
    /// the representable date range.
    #[must_use]
    pub fn week_strip(&self) -> Option<WeekStrip> {
        WeekStrip::build(&self.tracker, self.selected_day, self.first_weekday)
    }

    /// Month grid for the month containing `anchor`.
    #[must_use]
    pub fn month_grid(&self, anchor: impl IntoDay) -> MonthGrid {
        MonthGrid::build(
            &self.tracker,
            anchor.into_day(),
            self.selected_day,
            self.first_weekday,
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
