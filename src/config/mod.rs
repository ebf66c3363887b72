//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use duration_ms::config::{Config, DEFAULT_LOG_LEVEL};
//! use duration_ms::Style;
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     log_level: DEFAULT_LOG_LEVEL.to_string(),
//!     default_style: Style::Short,
//! };
//!
//! assert_eq!(config.default_style.as_str(), "short");
//! ```

mod validation;

pub use validation::{validate_config, LOG_LEVELS};

use crate::error::ConfigError;
use crate::format::Style;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default format style.
pub const DEFAULT_STYLE: Style = Style::Long;

/// Application configuration for the `duration-ms` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level or `tracing` filter directive.
    pub log_level: String,
    /// Style used by `format` when `--style` is not given.
    pub default_style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_style: DEFAULT_STYLE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `LOG_LEVEL`: Logging level or filter directive (default: `info`)
    /// - `DURATION_STYLE`: Default format style, `long` or `short` (default: `long`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `DURATION_STYLE` is not `long` or `short`
    /// - Any value fails validation (see [`validate_config`])
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let default_style = match std::env::var("DURATION_STYLE") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "DURATION_STYLE".into(),
                reason: "must be long or short".into(),
            })?,
            Err(_) => DEFAULT_STYLE,
        };

        let config = Self {
            log_level,
            default_style,
        };

        validate_config(&config)?;
        Ok(config)
    }
}
