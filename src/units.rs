//! Duration units shared by the parser and the formatter.
//!
//! Month and year are fixed-length approximations (30 days and 365.25 days),
//! not calendar-aware values.

use std::fmt;

/// A duration unit with a fixed millisecond magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// 365.25 days.
    Year,
    /// 30 days.
    Month,
    /// 7 days.
    Week,
    /// 24 hours.
    Day,
    /// 60 minutes.
    Hour,
    /// 60 seconds.
    Minute,
    /// 1000 milliseconds.
    Second,
    /// The base unit.
    Millisecond,
}

impl Unit {
    /// All units in strictly decreasing magnitude order.
    pub const ALL: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    /// Magnitude of one unit in milliseconds.
    #[must_use]
    pub const fn millis(self) -> f64 {
        match self {
            Self::Year => 31_557_600_000.0,
            Self::Month => 2_592_000_000.0,
            Self::Week => 604_800_000.0,
            Self::Day => 86_400_000.0,
            Self::Hour => 3_600_000.0,
            Self::Minute => 60_000.0,
            Self::Second => 1_000.0,
            Self::Millisecond => 1.0,
        }
    }

    /// Lowercase spellings recognized by the parser.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Year => &["years", "year", "yrs", "yr", "y"],
            Self::Month => &["months", "month", "mnth", "mth"],
            Self::Week => &["weeks", "week", "w"],
            Self::Day => &["days", "day", "d"],
            Self::Hour => &["hours", "hour", "hrs", "hr", "h"],
            Self::Minute => &["minutes", "minute", "mins", "min", "m"],
            Self::Second => &["seconds", "second", "secs", "sec", "s"],
            Self::Millisecond => &[
                "milliseconds",
                "millisecond",
                "millisecs",
                "millisec",
                "msecs",
                "msec",
                "ms",
            ],
        }
    }

    /// Suffix used by the short format style.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "mth",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
        }
    }

    /// Singular word used by the long format style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        }
    }

    /// Resolve a token to its unit, ignoring ASCII case.
    ///
    /// ```
    /// use duration_ms::Unit;
    ///
    /// assert_eq!(Unit::from_alias("MTH"), Some(Unit::Month));
    /// assert_eq!(Unit::from_alias("ms"), Some(Unit::Millisecond));
    /// assert_eq!(Unit::from_alias("fortnight"), None);
    /// ```
    #[must_use]
    pub fn from_alias(token: &str) -> Option<Self> {
        let token = token.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.aliases().contains(&token.as_str()))
    }

    /// Every alias of every unit, longest first.
    ///
    /// Scanning alternatives in this order means a token such as `ms` is
    /// never split into `m` followed by `s`.
    #[must_use]
    pub fn all_aliases_longest_first() -> Vec<&'static str> {
        let mut aliases: Vec<&'static str> = Self::ALL
            .into_iter()
            .flat_map(|unit| unit.aliases().iter().copied())
            .collect();
        aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        aliases
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
