//! Command line interface for the `duration-ms` binary.
//!
//! Arguments are parsed by hand into a [`Command`], which is then executed
//! against the loaded [`Config`](crate::config::Config).

mod commands;
mod errors;
mod help;


pub use commands::Command;
pub use errors::CommandParseError;
pub use help::help_text;
