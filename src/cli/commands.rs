//! CLI command definitions, parsing and execution.

use super::errors::CommandParseError;
use super::help::help_text;
use crate::config::Config;
use crate::error::AppError;
use crate::format::{format_duration, Style};
use crate::parser::parse_duration;

/// `duration-ms` commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert a duration expression to milliseconds.
    Parse {
        /// Arguments joined with single spaces.
        expression: String,
    },

    /// Convert milliseconds to duration text.
    Format {
        /// Millisecond count.
        ms: f64,
        /// Explicit style; falls back to the configured default.
        style: Option<Style>,
    },

    /// Show usage.
    Help,
}

impl Command {
    /// Parse a command from string arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for missing or unknown commands,
    /// unknown flags, and missing or invalid values.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some(first) = args.first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        match cmd.as_str() {
            "parse" => {
                if args.len() < 2 {
                    return Err(CommandParseError::MissingValue("expression".into()));
                }
                Ok(Self::Parse {
                    expression: args[1..].join(" "),
                })
            }

            "format" => {
                let mut ms = None;
                let mut style = None;

                let mut i = 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--style" | "-s" => {
                            i += 1;
                            let Some(value) = args.get(i) else {
                                return Err(CommandParseError::MissingValue("--style".into()));
                            };
                            style = Some(value.parse::<Style>().map_err(|_| {
                                CommandParseError::InvalidValue {
                                    flag: "--style".into(),
                                    value: value.clone(),
                                }
                            })?);
                        }
                        arg => match arg.parse::<f64>() {
                            Ok(value) if ms.is_none() && value.is_finite() => ms = Some(value),
                            Ok(_) => {
                                return Err(CommandParseError::InvalidValue {
                                    flag: "MS".into(),
                                    value: arg.to_string(),
                                });
                            }
                            Err(_) if arg.starts_with('-') => {
                                return Err(CommandParseError::UnknownFlag(arg.to_string()));
                            }
                            Err(_) => {
                                return Err(CommandParseError::InvalidValue {
                                    flag: "MS".into(),
                                    value: arg.to_string(),
                                });
                            }
                        },
                    }
                    i += 1;
                }

                let ms = ms.ok_or_else(|| CommandParseError::MissingValue("MS".into()))?;
                Ok(Self::Format { ms, style })
            }

            "help" | "--help" | "-h" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }

    /// Execute the command, returning the text to print.
    ///
    /// `Ok(None)` means the command ran but produced no value: nothing was
    /// recognized in a `parse` expression, or a `format` duration was zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Duration`] if the duration functions reject their
    /// arguments.
    pub fn execute(&self, config: &Config) -> Result<Option<String>, AppError> {
        match self {
            Self::Parse { expression } => {
                let ms = parse_duration(expression.as_str())?;
                tracing::debug!(expression = %expression, ?ms, "parsed expression");
                Ok(ms.map(|ms| ms.to_string()))
            }
            Self::Format { ms, style } => {
                let style = style.unwrap_or(config.default_style);
                tracing::debug!(ms, %style, "formatting duration");
                Ok(format_duration(*ms, style))
            }
            Self::Help => Ok(Some(help_text().trim_end().to_string())),
        }
    }
}
