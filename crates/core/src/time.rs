use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

/// Source of "now" in the user's zone. Day keys come from [`Clock::today`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// System time in the host's local zone.
    #[default]
    Local,
    /// System time at a fixed UTC offset.
    Offset(FixedOffset),
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// Returns a clock stopped at `at`, keeping the zone it was given in.
    #[must_use]
    pub fn fixed<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        let offset = at.offset().fix();
        Self::Fixed(at.with_timezone(&offset))
    }

    /// Same instant source, read at `offset` instead.
    #[must_use]
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        match self {
            Clock::Local | Clock::Offset(_) => Clock::Offset(offset),
            Clock::Fixed(t) => Clock::Fixed(t.with_timezone(&offset)),
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::Local => {
                let now = Local::now();
                now.with_timezone(now.offset())
            }
            Clock::Offset(offset) => Utc::now().with_timezone(offset),
            Clock::Fixed(t) => *t,
        }
    }

    /// Calendar day of [`Clock::now`] in the clock's zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a UTC `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
