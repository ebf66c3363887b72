//! Duration expression parser.
//!
//! Scans text for `<number><optional whitespace><unit alias>` segments and
//! sums them into a millisecond count. Text between segments is ignored.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::DurationError;
use crate::units::Unit;

/// Segment scanner, alias alternatives ordered longest first.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    let aliases = Unit::all_aliases_longest_first().join("|");
    // ASCII-only: `\d` must not match non-ASCII digits and `(?i)` must not
    // fold `ſ` onto `s`.
    RegexBuilder::new(&format!(r"(\d+(?:\.\d*)?)\s*({aliases})"))
        .case_insensitive(true)
        .unicode(false)
        .build()
        .unwrap_or_else(|e| unreachable!("segment pattern is static: {e}"))
});

/// Value accepted by [`parse_duration`].
///
/// Numbers are millisecond counts; text is a duration expression.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInput {
    /// A duration expression such as `"1d 2h"`.
    Text(String),
    /// A millisecond count. The sign is discarded.
    Number(f64),
}

impl From<&str> for DurationInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DurationInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DurationInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for DurationInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for DurationInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DurationInput {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<&Value> for DurationInput {
    type Error = DurationError;

    /// Strings and numbers are accepted; anything else is
    /// [`DurationError::InvalidInputType`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .ok_or(DurationError::InvalidInputType),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(DurationError::InvalidInputType)
            }
        }
    }
}

/// Parse a duration expression or millisecond count into milliseconds.
///
/// Returns `Ok(None)` when the text contains no recognizable segment, and
/// `Ok(Some(0.0))` when it does but every segment is zero.
///
/// # Errors
///
/// Returns [`DurationError::NonFiniteNumber`] for NaN or infinite numbers.
///
/// # Example
///
/// ```
/// use duration_ms::parse_duration;
///
/// assert_eq!(parse_duration("1d 2h").unwrap(), Some(93_600_000.0));
/// assert_eq!(parse_duration(-5000).unwrap(), Some(5000.0));
/// assert_eq!(parse_duration("hello world").unwrap(), None);
/// ```
pub fn parse_duration(value: impl Into<DurationInput>) -> Result<Option<f64>, DurationError> {
    let text = match value.into() {
        DurationInput::Text(text) => text,
        DurationInput::Number(number) if !number.is_finite() => {
            return Err(DurationError::NonFiniteNumber);
        }
        DurationInput::Number(number) => format!("{}ms", number.abs()),
    };

    Ok(scan(&text))
}

/// Parse a dynamically typed value, as found in JSON payloads.
///
/// # Errors
///
/// Returns [`DurationError::InvalidInputType`] unless the value is a string
/// or a number.
///
/// ```
/// use duration_ms::{parse_duration_value, DurationError};
/// use serde_json::json;
///
/// assert_eq!(parse_duration_value(&json!("3s")), Ok(Some(3000.0)));
/// assert_eq!(parse_duration_value(&json!(250)), Ok(Some(250.0)));
/// assert_eq!(
///     parse_duration_value(&json!(null)),
///     Err(DurationError::InvalidInputType)
/// );
/// ```
pub fn parse_duration_value(value: &Value) -> Result<Option<f64>, DurationError> {
    parse_duration(DurationInput::try_from(value)?)
}

fn scan(text: &str) -> Option<f64> {
    let mut total: Option<f64> = None;

    for caps in SEGMENT.captures_iter(text) {
        let (Some(number), Some(alias)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let (Ok(magnitude), Some(unit)) = (
            number.as_str().parse::<f64>(),
            Unit::from_alias(alias.as_str()),
        ) else {
            continue;
        };

        tracing::trace!(
            segment = &text[number.start()..alias.end()],
            %unit,
            magnitude,
            "matched duration segment"
        );
        *total.get_or_insert(0.0) += magnitude * unit.millis();
    }

    if total.is_none() {
        tracing::debug!(input = text, "no duration segment recognized");
    }
    total
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    const SECOND: f64 = 1_000.0;
    const MINUTE: f64 = 60_000.0;
    const HOUR: f64 = 3_600_000.0;
    const DAY: f64 = 86_400_000.0;

    fn parse(text: &str) -> Option<f64> {
        parse_duration(text).expect("text input never errors")
    }

    #[test]
    fn test_sums_multiple_segments() {
        assert_eq!(parse("1d 2h 3m"), Some(DAY + 2.0 * HOUR + 3.0 * MINUTE));
        assert_eq!(
            parse("2 days 3h 5min"),
            Some(2.0 * DAY + 3.0 * HOUR + 5.0 * MINUTE)
        );
    }

    #[test]
    fn test_ignores_unmatched_text() {
        assert_eq!(parse("foo 5 bar 3d baz"), Some(3.0 * DAY));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("42"), None);
    }

    #[test]
    fn test_zero_is_a_match() {
        assert_eq!(parse("0s"), Some(0.0));
        assert_eq!(parse("0d 0ms"), Some(0.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse("3D"), parse("3d"));
        assert_eq!(parse("1 HOUR 2 Mins"), Some(HOUR + 2.0 * MINUTE));
    }

    #[test]
    fn test_fractional_magnitudes() {
        assert_eq!(parse("1.5h"), Some(1.5 * HOUR));
        assert_eq!(parse("2.5 seconds"), Some(2.5 * SECOND));
        assert_eq!(parse("3.s"), Some(3.0 * SECOND));
    }

    #[test_case("5ms", 5.0 ; "millis abbreviation")]
    #[test_case("5 msecs", 5.0 ; "msecs")]
    #[test_case("5m", 5.0 * MINUTE ; "minute abbreviation")]
    #[test_case("5 mins", 5.0 * MINUTE ; "mins")]
    #[test_case("5mth", 5.0 * 2_592_000_000.0 ; "mth")]
    #[test_case("5 mnth", 5.0 * 2_592_000_000.0 ; "mnth")]
    #[test_case("5 months", 5.0 * 2_592_000_000.0 ; "months")]
    #[test_case("5 milliseconds", 5.0 ; "milliseconds")]
    #[test_case("5 millisecs", 5.0 ; "millisecs")]
    #[test_case("2yrs", 2.0 * 31_557_600_000.0 ; "yrs")]
    #[test_case("2 hrs", 2.0 * HOUR ; "hrs")]
    #[test_case("1w", 604_800_000.0 ; "week")]
    fn test_alias_disambiguation(text: &str, expected: f64) {
        assert_eq!(parse(text), Some(expected));
    }

    #[test]
    fn test_repeated_decimal_point_starts_new_number() {
        // `1.` has no unit after it, so the scan resumes at `5h`
        assert_eq!(parse("1..5h"), Some(5.0 * HOUR));
    }

    #[test]
    fn test_adjacent_segments_without_spaces() {
        assert_eq!(parse("1h30m15s"), Some(HOUR + 30.0 * MINUTE + 15.0 * SECOND));
    }

    #[test]
    fn test_whitespace_between_number_and_unit() {
        assert_eq!(parse("7 \t d"), Some(7.0 * DAY));
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(parse("\u{0663}d"), None);
    }

    #[test]
    fn test_number_input_is_millis() {
        assert_eq!(parse_duration(5000).unwrap(), Some(5000.0));
        assert_eq!(parse_duration(-5000).unwrap(), Some(5000.0));
        assert_eq!(parse_duration(0.25).unwrap(), Some(0.25));
        assert_eq!(parse_duration(0).unwrap(), Some(0.0));
        assert_eq!(parse_duration(-0.0).unwrap(), Some(0.0));
        assert_eq!(parse_duration(1e300).unwrap(), Some(1e300));
    }

    #[test]
    fn test_non_finite_number_errors() {
        assert_eq!(parse_duration(f64::NAN), Err(DurationError::NonFiniteNumber));
        assert_eq!(
            parse_duration(f64::INFINITY),
            Err(DurationError::NonFiniteNumber)
        );
        assert_eq!(
            parse_duration(f64::NEG_INFINITY),
            Err(DurationError::NonFiniteNumber)
        );
    }

    #[test]
    fn test_value_input_types() {
        assert_eq!(parse_duration_value(&json!("1m")), Ok(Some(MINUTE)));
        assert_eq!(parse_duration_value(&json!(-250)), Ok(Some(250.0)));
        for bad in [json!(null), json!(true), json!([1]), json!({"ms": 1})] {
            assert_eq!(
                parse_duration_value(&bad),
                Err(DurationError::InvalidInputType),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_string_inputs() {
        let owned = String::from("2s");
        assert_eq!(parse_duration(&owned).unwrap(), Some(2.0 * SECOND));
        assert_eq!(parse_duration(owned).unwrap(), Some(2.0 * SECOND));
    }
}
