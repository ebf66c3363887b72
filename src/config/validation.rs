//! Configuration validation.

use super::Config;
use crate::error::ConfigError;

/// Plain log levels accepted in `LOG_LEVEL`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `LOG_LEVEL` is neither one of
/// [`LOG_LEVELS`] nor a `target=level` filter directive.
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let level = config.log_level.trim().to_ascii_lowercase();

    // Directives such as `duration_ms=trace` are left to EnvFilter
    if !level.contains('=') && !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::InvalidValue {
            var: "LOG_LEVEL".into(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    Ok(())
}
