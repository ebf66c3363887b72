//! Millisecond count formatter.
//!
//! Decomposes a duration greedily from the largest unit down, then renders
//! each non-zero component in the requested [`Style`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;
use crate::units::Unit;

/// Output verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Full unit words with plurals, e.g. `2 days 1 hour`.
    #[default]
    Long,
    /// Fixed abbreviations, e.g. `2d 1h`.
    Short,
}

impl Style {
    /// The flag spelling of this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl FromStr for Style {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            _ => Err(DurationError::InvalidStyle),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a millisecond count.
///
/// The sign is discarded. Returns `None` when every component is zero or
/// the input is not finite. A fractional millisecond remainder is emitted
/// as-is. Counts are written out in full with no exponent notation, so very
/// large inputs produce long year counts.
///
/// ```
/// use duration_ms::{format_duration, Style};
///
/// assert_eq!(format_duration(90_000.0, Style::Short).as_deref(), Some("1m 30s"));
/// assert_eq!(format_duration(172_800_000.0, Style::Long).as_deref(), Some("2 days"));
/// assert_eq!(format_duration(0.0, Style::Long), None);
/// ```
#[must_use]
pub fn format_duration(ms: f64, style: Style) -> Option<String> {
    if !ms.is_finite() {
        tracing::debug!(ms, "refusing to format non-finite duration");
        return None;
    }

    let tokens: Vec<String> = decompose(ms.abs())
        .into_iter()
        .map(|(unit, count)| render(unit, count, style))
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Format a millisecond count with a style flag given as text.
///
/// # Errors
///
/// Returns [`DurationError::InvalidStyle`] unless `style` is `long` or `short`.
pub fn format_duration_str(ms: f64, style: &str) -> Result<Option<String>, DurationError> {
    Ok(format_duration(ms, style.parse()?))
}

/// Split `remaining` into `(unit, count)` pairs, largest unit first.
fn decompose(mut remaining: f64) -> Vec<(Unit, f64)> {
    let mut parts = Vec::with_capacity(Unit::ALL.len());

    for unit in Unit::ALL {
        if unit == Unit::Millisecond {
            if remaining > 0.0 {
                parts.push((unit, remaining));
            }
            break;
        }

        let count = (remaining / unit.millis()).floor();
        if count > 0.0 {
            remaining -= count * unit.millis();
            parts.push((unit, count));
        }
    }

    parts
}

fn render(unit: Unit, count: f64, style: Style) -> String {
    match style {
        Style::Long if count > 1.0 => format!("{count} {}s", unit.name()),
        Style::Long => format!("{count} {}", unit.name()),
        Style::Short => format!("{count}{}", unit.abbreviation()),
    }
}
