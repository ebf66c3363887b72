//! Property-based tests for the parser and formatter.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use duration_ms::{format_duration, parse_duration, Style};
use proptest::prelude::*;

fn style() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Long), Just(Style::Short)]
}

proptest! {
    #[test]
    fn prop_integer_millis_round_trip(ms in 1_u64..10_000_000_000_000, style in style()) {
        #[allow(clippy::cast_precision_loss)]
        let ms = ms as f64;
        let text = format_duration(ms, style).expect("non-zero duration");
        prop_assert_eq!(parse_duration(text.as_str()).unwrap(), Some(ms));
    }

    #[test]
    fn prop_format_discards_sign(ms in -1e12_f64..1e12, style in style()) {
        prop_assert_eq!(format_duration(-ms, style), format_duration(ms, style));
    }

    #[test]
    fn prop_parse_number_discards_sign(ms in -1e12_f64..1e12) {
        prop_assert_eq!(parse_duration(ms).unwrap(), Some(ms.abs()));
    }

    #[test]
    fn prop_parse_text_never_errors(text in ".*") {
        prop_assert!(parse_duration(text.as_str()).is_ok());
    }

    #[test]
    fn prop_digit_free_text_is_none(text in "[^0-9]*") {
        prop_assert_eq!(parse_duration(text.as_str()).unwrap(), None);
    }

    #[test]
    fn prop_short_output_has_no_spaces_inside_tokens(ms in 1_u64..10_000_000_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let text = format_duration(ms as f64, Style::Short).expect("non-zero duration");
        for token in text.split(' ') {
            prop_assert!(token.starts_with(|c: char| c.is_ascii_digit()), "token {}", token);
        }
    }
}
