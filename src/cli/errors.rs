//! Argument errors for the `duration-ms` binary.

use thiserror::Error;

/// Error turning command line arguments into a [`Command`](super::Command).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// No command given.
    #[error("No command provided. Use 'help' for available commands.")]
    MissingCommand,

    /// First argument is not a known command.
    #[error("Unknown command: '{0}'. Use 'help' for available commands.")]
    UnknownCommand(String),

    /// Flag not understood by the command.
    #[error("Unknown flag: '{0}'")]
    UnknownFlag(String),

    /// Flag or positional argument without a value.
    #[error("Missing value for '{0}'")]
    MissingValue(String),

    /// Value that could not be interpreted.
    #[error("Invalid value '{value}' for '{flag}'")]
    InvalidValue {
        /// Flag or positional argument name.
        flag: String,
        /// What was given.
        value: String,
    },
}
