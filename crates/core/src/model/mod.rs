mod day;
mod duration;
mod goal;
mod progress;

pub use day::{DayStatus, IntoDay};
pub use duration::{GoalDuration, ParseDurationError};
pub use goal::Goal;
pub use progress::{FreezeOutcome, ProgressState};
