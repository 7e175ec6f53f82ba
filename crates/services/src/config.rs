use chrono::{FixedOffset, Weekday};

use journey_core::{Goal, GoalDuration};

use crate::error::ConfigError;

pub const TOPIC_VAR: &str = "JOURNEY_TOPIC";
pub const DURATION_VAR: &str = "JOURNEY_DURATION";
pub const FIRST_WEEKDAY_VAR: &str = "JOURNEY_FIRST_WEEKDAY";
pub const UTC_OFFSET_VAR: &str = "JOURNEY_UTC_OFFSET";
pub const LOG_VAR: &str = "JOURNEY_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Startup settings for an activity session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyConfig {
    pub topic: String,
    pub duration: GoalDuration,
    /// First column of week strips and month grids.
    pub first_weekday: Weekday,
    /// Zone that decides which calendar day "today" is, e.g. `+03:00`.
    /// `None` keeps the clock's own zone.
    pub utc_offset: Option<FixedOffset>,
    pub log_filter: String,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            topic: String::new(),
            duration: GoalDuration::Week,
            first_weekday: Weekday::Sun,
            utc_offset: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl JourneyConfig {
    /// Reads `JOURNEY_*` variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or blank keys keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(topic) = get(TOPIC_VAR) {
            config.topic = topic.trim().to_owned();
        }
        if let Some(raw) = get(DURATION_VAR) {
            config.duration = raw.parse().map_err(|source| ConfigError::Duration {
                key: DURATION_VAR,
                source,
            })?;
        }
        if let Some(raw) = get(FIRST_WEEKDAY_VAR) {
            config.first_weekday = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Weekday {
                    key: FIRST_WEEKDAY_VAR,
                    raw: raw.clone(),
                })?;
        }
        if let Some(raw) = get(UTC_OFFSET_VAR) {
            let offset = raw
                .trim()
                .parse::<FixedOffset>()
                .map_err(|_| ConfigError::UtcOffset {
                    key: UTC_OFFSET_VAR,
                    raw: raw.clone(),
                })?;
            config.utc_offset = Some(offset);
        }
        if let Some(filter) = get(LOG_VAR) {
            config.log_filter = filter.trim().to_owned();
        }

        Ok(config)
    }

    #[must_use]
    pub fn goal(&self) -> Goal {
        Goal::new(self.topic.clone(), self.duration)
    }
}
