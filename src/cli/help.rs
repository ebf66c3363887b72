//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"duration-ms: convert between duration text and milliseconds

  parse EXPRESSION...     Print the milliseconds in a duration expression
                          Segments are summed, other text is ignored

  format MS [options]     Print a millisecond count as duration text
    --style, -s STYLE       long or short (default: $DURATION_STYLE or long)

  help, --help, -h        Show this message

Units:
  y   years, year, yrs, yr, y
  mth months, month, mnth, mth
  w   weeks, week, w
  d   days, day, d
  h   hours, hour, hrs, hr, h
  m   minutes, minute, mins, min, m
  s   seconds, second, secs, sec, s
  ms  milliseconds, millisecond, millisecs, millisec, msecs, msec, ms

Examples:
  duration-ms parse 2 days 3h 5min
  duration-ms parse "1.5h"
  duration-ms format 90000 --style short
  duration-ms format 172800000
"#
}
