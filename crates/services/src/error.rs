//! Shared error types for the services crate.

use thiserror::Error;

use journey_core::ParseDurationError;

/// Errors emitted by the edit-goal flow of `ActivitySession`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditFlowError {
    #[error("no goal edit has been requested")]
    NotRequested,
    #[error("goal edit is waiting for confirmation")]
    AwaitingConfirmation,
    #[error("goal editor is not open")]
    EditorClosed,
    #[error("a goal edit is already in progress")]
    AlreadyEditing,
}

/// Errors emitted while reading `JourneyConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {key}: {source}")]
    Duration {
        key: &'static str,
        #[source]
        source: ParseDurationError,
    },
    #[error("invalid {key}: unknown weekday {raw}")]
    Weekday { key: &'static str, raw: String },
    #[error("invalid {key}: expected an offset like +03:00, got {raw}")]
    UtcOffset { key: &'static str, raw: String },
    #[error("invalid log filter {raw}: {reason}")]
    LogFilter { raw: String, reason: String },
}
