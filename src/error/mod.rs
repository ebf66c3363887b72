//! Error types for duration parsing and formatting.
//!
//! This module defines a small error hierarchy:
//! - [`AppError`]: Top-level errors surfaced by the binary
//! - [`DurationError`]: Invalid arguments passed to the parser or formatter
//! - [`ConfigError`]: Configuration errors
//!
//! Absent results (unrecognized text, zero durations) are `None`, never errors.

use thiserror::Error;

use crate::cli::CommandParseError;

/// Top-level application error.
///
/// Wraps every subsystem error so the binary can report them uniformly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Duration argument error.
    #[error("Duration error: {0}")]
    Duration(#[from] DurationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command line error.
    #[error("Command error: {0}")]
    Command(#[from] CommandParseError),
}

/// Invalid arguments for [`parse_duration`](crate::parse_duration) and
/// [`format_duration_str`](crate::format_duration_str).
///
/// Raised before any output is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    /// Parser input was neither a string nor a number.
    #[error("invalid input type")]
    InvalidInputType,

    /// Parser input was NaN or infinite.
    #[error("non-finite number")]
    NonFiniteNumber,

    /// Formatter style flag was not `long` or `short`.
    #[error("invalid style")]
    InvalidStyle,
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
