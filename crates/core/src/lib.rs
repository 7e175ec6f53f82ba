#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;
pub mod tracker;

pub use error::Error;
pub use model::{
    DayStatus, FreezeOutcome, Goal, GoalDuration, IntoDay, ParseDurationError, ProgressState,
};
pub use time::Clock;
pub use tracker::{GoalTracker, ProgressSummary};
