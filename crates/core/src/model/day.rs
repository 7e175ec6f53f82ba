use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Anything that can be reduced to a calendar day.
///
/// Progress is tracked per day, so the time-of-day component of an input is
/// discarded. A zoned timestamp resolves to the date in its own zone; convert
/// it to the user's zone first when that differs.
pub trait IntoDay {
    fn into_day(self) -> NaiveDate;
}

impl IntoDay for NaiveDate {
    fn into_day(self) -> NaiveDate {
        self
    }
}

impl IntoDay for NaiveDateTime {
    fn into_day(self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> IntoDay for DateTime<Tz> {
    fn into_day(self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: IntoDay + Copy> IntoDay for &T {
    fn into_day(self) -> NaiveDate {
        (*self).into_day()
    }
}

/// Status of one calendar day within a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    Unset,
    Learned,
    Frozen,
}

impl DayStatus {
    /// True for days that count toward completing the goal.
    #[must_use]
    pub fn is_logged(self) -> bool {
        !matches!(self, DayStatus::Unset)
    }
}
