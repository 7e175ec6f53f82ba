//! Calendar projections of a goal's progress.
//!
//! Pure functions over `GoalTracker`; rendering is left to the host UI.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Serialize;

use journey_core::{DayStatus, GoalTracker};

//
// ─── CELLS ─────────────────────────────────────────────────────────────────────
//

/// One day of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_selected: bool,
}

/// Slot of a month grid; leading slots before the 1st are blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridSlot {
    Blank,
    Day(DayCell),
}

impl GridSlot {
    #[must_use]
    pub fn cell(&self) -> Option<&DayCell> {
        match self {
            GridSlot::Blank => None,
            GridSlot::Day(cell) => Some(cell),
        }
    }
}

//
// ─── WEEK STRIP ────────────────────────────────────────────────────────────────
//

/// The seven days of the week containing the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekStrip {
    pub days: Vec<DayCell>,
}

impl WeekStrip {
    /// Returns `None` when the week around `selected` does not fit between
    /// `NaiveDate::MIN` and `NaiveDate::MAX`.
    #[must_use]
    pub fn build(
        tracker: &GoalTracker,
        selected: NaiveDate,
        first_weekday: Weekday,
    ) -> Option<Self> {
        let start = selected
            .checked_sub_signed(Duration::days(days_since(selected.weekday(), first_weekday)))?;
        start.checked_add_signed(Duration::days(6))?;
        let days = start
            .iter_days()
            .take(7)
            .map(|date| DayCell {
                date,
                status: tracker.status(date),
                is_selected: date == selected,
            })
            .collect();
        Some(Self { days })
    }

    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().map(|cell| cell.date)
    }
}

//
// ─── MONTH GRID ────────────────────────────────────────────────────────────────
//

/// A month laid out in week rows.
///
/// `slots` starts with `leading_blanks` blank slots so the 1st lands under
/// its weekday column; there are no trailing blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_weekday: Weekday,
    pub leading_blanks: usize,
    pub slots: Vec<GridSlot>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `anchor`.
    #[must_use]
    pub fn build(
        tracker: &GoalTracker,
        anchor: NaiveDate,
        selected: NaiveDate,
        first_weekday: Weekday,
    ) -> Self {
        let first = anchor.with_day(1).unwrap_or(anchor);
        let leading_blanks =
            usize::try_from(days_since(first.weekday(), first_weekday)).unwrap_or(0);

        let mut slots = vec![GridSlot::Blank; leading_blanks];
        slots.extend(
            first
                .iter_days()
                .take_while(|date| date.month() == first.month())
                .map(|date| {
                    GridSlot::Day(DayCell {
                        date,
                        status: tracker.status(date),
                        is_selected: date == selected,
                    })
                }),
        );

        Self {
            year: first.year(),
            month: first.month(),
            first_weekday,
            leading_blanks,
            slots,
        }
    }

    /// Number of days in the month.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.slots.len() - self.leading_blanks
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.slots.iter().filter_map(GridSlot::cell)
    }

    /// Column headers in display order, e.g. `Sun Mon … Sat`.
    #[must_use]
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        weekday_headers(self.first_weekday)
    }
}

/// Weekdays starting from `first`.
#[must_use]
pub fn weekday_headers(first: Weekday) -> [Weekday; 7] {
    let mut headers = [first; 7];
    for i in 1..7 {
        headers[i] = headers[i - 1].succ();
    }
    headers
}

/// Moves `day` by whole calendar months, clamping to the month's last day.
///
/// Returns `None` outside chrono's representable range.
#[must_use]
pub fn shift_months(day: NaiveDate, months: i32) -> Option<NaiveDate> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        day.checked_add_months(magnitude)
    } else {
        day.checked_sub_months(magnitude)
    }
}

fn days_since(weekday: Weekday, first: Weekday) -> i64 {
    let from = i64::from(weekday.num_days_from_monday());
    let start = i64::from(first.num_days_from_monday());
    (from - start).rem_euclid(7)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
