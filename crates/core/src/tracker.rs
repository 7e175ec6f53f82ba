use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{DayStatus, FreezeOutcome, Goal, GoalDuration, IntoDay, ProgressState};

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Counters a presentation layer needs to render the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub learned: usize,
    pub frozen: usize,
    pub freeze_limit: usize,
    pub target_days: usize,
    pub is_complete: bool,
}

impl ProgressSummary {
    #[must_use]
    pub fn freezes_remaining(&self) -> usize {
        self.freeze_limit.saturating_sub(self.frozen)
    }
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Owns one goal and its per-day progress.
///
/// Every operation is total. The learned and frozen sets stay disjoint and
/// the frozen set never grows past the duration's freeze limit; a freeze over
/// quota is silently rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalTracker {
    goal: Goal,
    progress: ProgressState,
}

impl GoalTracker {
    /// Starts tracking `goal` with no logged days.
    #[must_use]
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            progress: ProgressState::new(),
        }
    }

    // Accessors
    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        self.goal.topic()
    }

    #[must_use]
    pub fn duration(&self) -> GoalDuration {
        self.goal.duration()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.progress.learned_count()
    }

    #[must_use]
    pub fn frozen_count(&self) -> usize {
        self.progress.frozen_count()
    }

    #[must_use]
    pub fn freeze_limit(&self) -> usize {
        self.duration().freeze_limit()
    }

    #[must_use]
    pub fn target_days(&self) -> usize {
        self.duration().target_days()
    }

    #[must_use]
    pub fn freezes_remaining(&self) -> usize {
        self.freeze_limit().saturating_sub(self.frozen_count())
    }

    /// Whether a new day may be frozen right now.
    ///
    /// Un-freezing an already frozen day is always possible.
    #[must_use]
    pub fn can_freeze(&self) -> bool {
        self.frozen_count() < self.freeze_limit()
    }

    /// True once learned plus frozen days reach the target.
    ///
    /// Recomputed on each call; dropping below target flips it back.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.logged_count() >= self.target_days()
    }

    #[must_use]
    pub fn status(&self, day: impl IntoDay) -> DayStatus {
        self.progress.status(day.into_day())
    }

    pub fn learned_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.progress.learned_days()
    }

    pub fn frozen_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.progress.frozen_days()
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            learned: self.learned_count(),
            frozen: self.frozen_count(),
            freeze_limit: self.freeze_limit(),
            target_days: self.target_days(),
            is_complete: self.is_complete(),
        }
    }

    /// Logs `day` as learned, or un-logs it if it already was.
    ///
    /// Returns the day's status afterwards.
    pub fn toggle_learned(&mut self, day: impl IntoDay) -> DayStatus {
        self.progress.toggle_learned(day.into_day())
    }

    /// Freezes `day`, or un-freezes it if it already was.
    ///
    /// Freezing is a no-op once the freeze limit is reached.
    pub fn toggle_frozen(&mut self, day: impl IntoDay) -> FreezeOutcome {
        let limit = self.freeze_limit();
        self.progress.toggle_frozen(day.into_day(), limit)
    }

    /// Clears every learned and frozen day.
    pub fn reset_progress(&mut self) {
        self.progress.clear();
    }

    /// Replaces the goal, optionally clearing progress.
    ///
    /// When progress is kept and the new duration allows fewer freezes than
    /// are in use, the latest frozen days are released back to unset. Those
    /// days are returned; the list is empty otherwise.
    pub fn change_goal(
        &mut self,
        topic: impl Into<String>,
        duration: GoalDuration,
        reset_progress: bool,
    ) -> Vec<NaiveDate> {
        self.goal = Goal::new(topic, duration);
        if reset_progress {
            self.progress.clear();
            return Vec::new();
        }
        self.progress.release_frozen_over(duration.freeze_limit())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn day(n: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(n)
    }

    fn tracker(duration: GoalDuration) -> GoalTracker {
        GoalTracker::new(Goal::new("Rust", duration))
    }

    #[test]
    fn week_goal_completes_with_five_learned_and_two_frozen() {
        let mut t = tracker(GoalDuration::Week);
        for n in 1..=5 {
            t.toggle_learned(day(n));
        }
        assert!(!t.is_complete());
        assert_eq!(t.toggle_frozen(day(6)), FreezeOutcome::Frozen);
        assert_eq!(t.toggle_frozen(day(7)), FreezeOutcome::Frozen);
        assert!(t.is_complete());

        assert_eq!(t.toggle_frozen(day(8)), FreezeOutcome::QuotaReached);
        assert_eq!(t.frozen_count(), 2);
        assert_eq!(t.status(day(8)), DayStatus::Unset);
    }

    #[test]
    fn month_goal_rejects_ninth_freeze() {
        let mut t = tracker(GoalDuration::Month);
        for n in 1..=9 {
            t.toggle_frozen(day(n));
        }
        assert_eq!(t.frozen_count(), 8);
        assert_eq!(t.status(day(9)), DayStatus::Unset);
        assert!(!t.can_freeze());
        assert_eq!(t.freezes_remaining(), 0);
    }

    #[test]
    fn toggling_learned_twice_returns_to_unset() {
        let mut t = tracker(GoalDuration::Week);
        assert_eq!(t.toggle_learned(day(0)), DayStatus::Learned);
        assert_eq!(t.toggle_learned(day(0)), DayStatus::Unset);
        assert_eq!(t.status(day(0)), DayStatus::Unset);
    }

    #[test]
    fn learned_overrides_frozen() {
        let mut t = tracker(GoalDuration::Week);
        t.toggle_frozen(day(2));
        t.toggle_learned(day(2));
        assert_eq!(t.status(day(2)), DayStatus::Learned);
        assert_eq!(t.frozen_count(), 0);
        assert_eq!(t.learned_count(), 1);
    }

    #[test]
    fn times_on_the_same_day_share_a_key() {
        let mut t = tracker(GoalDuration::Week);
        let morning = Utc.with_ymd_and_hms(2024, 2, 10, 7, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 2, 10, 21, 45, 0).unwrap();
        t.toggle_learned(morning);
        assert_eq!(t.status(evening), DayStatus::Learned);
        t.toggle_learned(evening);
        assert_eq!(t.learned_count(), 0);
    }

    #[test]
    fn reset_clears_progress_and_completion() {
        let mut t = tracker(GoalDuration::Week);
        for n in 0..7 {
            t.toggle_learned(day(n));
        }
        assert!(t.is_complete());
        t.reset_progress();
        assert_eq!(t.learned_count(), 0);
        assert_eq!(t.frozen_count(), 0);
        assert!(!t.is_complete());
    }

    #[test]
    fn completion_is_not_sticky() {
        let mut t = tracker(GoalDuration::Week);
        for n in 0..7 {
            t.toggle_learned(day(n));
        }
        assert!(t.is_complete());
        t.toggle_learned(day(3));
        assert!(!t.is_complete());
    }

    #[test]
    fn past_and_future_days_are_accepted() {
        let mut t = tracker(GoalDuration::Year);
        t.toggle_learned(day(-400));
        t.toggle_learned(day(4000));
        assert_eq!(t.learned_count(), 2);
    }

    #[test]
    fn change_goal_with_reset_clears_progress() {
        let mut t = tracker(GoalDuration::Week);
        t.toggle_learned(day(1));
        t.toggle_frozen(day(2));
        let released = t.change_goal("  Japanese ", GoalDuration::Year, true);
        assert!(released.is_empty());
        assert_eq!(t.topic(), "Japanese");
        assert_eq!(t.duration(), GoalDuration::Year);
        assert!(t.progress().is_empty());
    }

    #[test]
    fn change_goal_without_reset_keeps_progress() {
        let mut t = tracker(GoalDuration::Week);
        t.toggle_learned(day(1));
        t.toggle_frozen(day(2));
        let released = t.change_goal("Rust", GoalDuration::Month, false);
        assert!(released.is_empty());
        assert_eq!(t.learned_count(), 1);
        assert_eq!(t.frozen_count(), 1);
        assert_eq!(t.target_days(), 30);
    }

    #[test]
    fn shrinking_duration_releases_latest_freezes() {
        let mut t = tracker(GoalDuration::Month);
        for n in 1..=5 {
            t.toggle_frozen(day(n));
        }
        let released = t.change_goal("Rust", GoalDuration::Week, false);
        assert_eq!(released, vec![day(3), day(4), day(5)]);
        assert_eq!(t.frozen_count(), 2);
        assert_eq!(t.status(day(1)), DayStatus::Frozen);
        assert_eq!(t.status(day(5)), DayStatus::Unset);
    }

    #[test]
    fn summary_reports_counters() {
        let mut t = tracker(GoalDuration::Week);
        t.toggle_learned(day(1));
        t.toggle_frozen(day(2));
        let summary = t.summary();
        assert_eq!(
            summary,
            ProgressSummary {
                learned: 1,
                frozen: 1,
                freeze_limit: 2,
                target_days: 7,
                is_complete: false,
            }
        );
        assert_eq!(summary.freezes_remaining(), 1);
    }
}
