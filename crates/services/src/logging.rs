use tracing_subscriber::EnvFilter;

use crate::config::JourneyConfig;
use crate::error::ConfigError;

/// Installs a fmt subscriber filtered by `config.log_filter`.
///
/// `RUST_LOG` wins over the configured filter when set. Calling this again
/// after a subscriber is installed does nothing.
///
/// # Errors
///
/// Returns `ConfigError::LogFilter` if the configured directive is malformed.
pub fn init_tracing(config: &JourneyConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter).map_err(|err| ConfigError::LogFilter {
            raw: config.log_filter.clone(),
            reason: err.to_string(),
        })?,
    };

    // Already installed by the host; keep theirs.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
    Ok(())
}
