//! Duration text to milliseconds, and back.
//!
//! Parses expressions such as `"2 days 3h 5min"` into a millisecond count
//! and formats millisecond counts as `"2 days 3 hours 5 minutes"` or
//! `"2d 3h 5m"`.
//!
//! # Quick Start
//!
//! ```
//! use duration_ms::{format_duration, parse_duration, Style};
//!
//! let ms = parse_duration("1d 2h 3m").unwrap().unwrap();
//! assert_eq!(ms, 93_780_000.0);
//! assert_eq!(
//!     format_duration(ms, Style::Short).as_deref(),
//!     Some("1d 2h 3m")
//! );
//! ```
//!
//! # Units
//!
//! Month and year are fixed approximations (30 and 365.25 days). See
//! [`Unit`] for every recognized alias.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod units;

pub use error::DurationError;
pub use format::{format_duration, format_duration_str, Style};
pub use parser::{parse_duration, parse_duration_value, DurationInput};
pub use units::Unit;
