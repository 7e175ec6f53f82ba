#![forbid(unsafe_code)]

pub mod activity;
pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;

pub use journey_core::Clock;

pub use activity::{ActivitySession, ActivitySummary, EditFlow, LogOutcome};
pub use calendar::{DayCell, GridSlot, MonthGrid, WeekStrip};
pub use config::JourneyConfig;
pub use error::{ConfigError, EditFlowError};
pub use logging::init_tracing;
