mod edit_flow;
mod session;
mod summary;

// Public API of the activity subsystem.
pub use crate::error::EditFlowError;
pub use edit_flow::EditFlow;
pub use session::{ActivitySession, LogOutcome};
pub use summary::ActivitySummary;
