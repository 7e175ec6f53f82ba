use chrono::{FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use journey_core::time::fixed_now;
use journey_core::{DayStatus, Goal, GoalDuration};
use services::{ActivitySession, Clock, EditFlow, EditFlowError, GridSlot, JourneyConfig};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, m, d).unwrap()
}

fn week_session() -> ActivitySession {
    ActivitySession::new(Goal::new("Swift", GoalDuration::Week), Clock::fixed(fixed_now()))
}

#[test]
fn week_goal_runs_to_completion_and_restarts() {
    let mut session = week_session();

    for d in 1..=5 {
        session.select_day(day(11, d));
        let outcome = session.log_learned();
        assert!(!outcome.is_complete);
    }
    session.select_day(day(11, 6));
    session.log_frozen();
    session.select_day(day(11, 7));
    let outcome = session.log_frozen();
    assert!(outcome.is_complete);

    session.select_day(day(11, 8));
    let outcome = session.log_frozen();
    assert!(outcome.rejected);
    assert_eq!(outcome.status, DayStatus::Unset);

    let summary = session.summary();
    assert_eq!((summary.learned, summary.frozen), (5, 2));
    assert!(summary.is_complete);
    assert!(!summary.can_freeze);

    session.restart_same_goal();
    let summary = session.summary();
    assert_eq!((summary.learned, summary.frozen), (0, 0));
    assert!(!summary.is_complete);
    assert_eq!(summary.topic, "Swift");
}

#[test]
fn confirmed_edit_always_resets_progress() {
    let mut session = week_session();
    session.log_learned();
    session.shift_week(-1);
    session.log_frozen();

    session.request_edit().unwrap();
    assert_eq!(session.edit_flow(), EditFlow::Warning);
    session.confirm_edit().unwrap();
    session.save_goal("  Swift  ", GoalDuration::Week).unwrap();

    assert!(session.edit_flow().is_idle());
    assert_eq!(session.tracker().goal(), &Goal::new("Swift", GoalDuration::Week));
    assert!(session.tracker().progress().is_empty());
}

#[test]
fn dismissed_edit_keeps_progress() {
    let mut session = week_session();
    session.log_learned();
    session.request_edit().unwrap();
    session.dismiss_edit().unwrap();
    assert_eq!(session.tracker().learned_count(), 1);
    assert_eq!(session.save_goal("Go", GoalDuration::Year), Err(EditFlowError::EditorClosed));
}

#[test]
fn new_goal_from_completed_screen_resets() {
    let mut session = week_session();
    for d in 1..=7 {
        session.select_day(day(10, d));
        session.log_learned();
    }
    assert!(session.summary().is_complete);

    session.set_new_goal().unwrap();
    assert_eq!(session.edit_flow(), EditFlow::Editing);
    session.save_goal("Kotlin", GoalDuration::Year).unwrap();

    let summary = session.summary();
    assert_eq!(summary.topic, "Kotlin");
    assert_eq!(summary.duration, GoalDuration::Year);
    assert_eq!(summary.freeze_limit, 96);
    assert_eq!(summary.target_days, 365);
    assert_eq!(summary.learned, 0);
}

#[test]
fn config_drives_goal_and_calendar_alignment() {
    let config = JourneyConfig {
        topic: "Arabic".into(),
        duration: GoalDuration::Month,
        first_weekday: Weekday::Mon,
        ..JourneyConfig::default()
    };
    let mut session = ActivitySession::from_config(&config, Clock::fixed(fixed_now()));
    assert_eq!(session.tracker().freeze_limit(), 8);

    session.log_learned();
    let strip = session.week_strip().unwrap();
    // 2023-11-14 is a Tuesday.
    assert_eq!(strip.first_day(), Some(day(11, 13)));
    assert_eq!(strip.days[1].status, DayStatus::Learned);
    assert!(strip.days[1].is_selected);

    // 2023-11-01 is a Wednesday.
    let grid = session.month_grid(day(11, 20));
    assert_eq!(grid.leading_blanks, 2);
    assert_eq!(grid.day_count(), 30);
    let learned: Vec<_> = grid
        .days()
        .filter(|cell| cell.status == DayStatus::Learned)
        .map(|cell| cell.date)
        .collect();
    assert_eq!(learned, vec![day(11, 14)]);
}

#[test]
fn configured_offset_decides_today() {
    let config = JourneyConfig {
        utc_offset: FixedOffset::east_opt(3 * 3600),
        ..JourneyConfig::default()
    };
    let late_evening = Utc.with_ymd_and_hms(2024, 3, 9, 22, 30, 0).unwrap();
    let mut session = ActivitySession::from_config(&config, Clock::fixed(late_evening));

    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert_eq!(session.selected_day(), today);
    assert_eq!(session.log_learned().day, today);
    assert_eq!(session.summary().selected_day, today);

    let utc_session =
        ActivitySession::from_config(&JourneyConfig::default(), Clock::fixed(late_evening));
    assert_eq!(utc_session.selected_day(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
}

#[test]
fn week_strip_near_calendar_limits_does_not_panic() {
    let mut session = week_session();
    session.select_day(NaiveDate::MIN);
    assert!(session.week_strip().is_none_or(|strip| strip.days.len() == 7));
    session.select_day(NaiveDate::MAX);
    assert!(session.week_strip().is_none_or(|strip| strip.days.len() == 7));
}

#[test]
fn summary_serializes_for_ui_bridge() {
    let mut session = week_session();
    session.log_learned();
    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["learned"], 1);
    assert_eq!(json["duration"], "week");
    assert_eq!(json["selected_status"], "learned");
    assert_eq!(json["selected_day"], "2023-11-14");

    let grid = serde_json::to_value(session.month_grid(day(11, 1))).unwrap();
    assert_eq!(grid["slots"][0]["kind"], "blank");
    assert!(matches!(session.month_grid(day(11, 1)).slots[0], GridSlot::Blank));
}
