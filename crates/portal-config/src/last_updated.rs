//! Last-updated timestamp transformer.

use chrono::{DateTime, Datelike, Timelike};

/// Largest magnitude, in milliseconds, a JavaScript `Date` accepts.
const MAX_DATE_MILLIS: u64 = 8_640_000_000_000_000;

/// Rendition produced for timestamps that are not valid dates.
const INVALID_DATE: &str = "NaN-NaN-NaN, NaN:NaN:NaN UTC";

/// Format a millisecond Unix timestamp as `YYYY-MM-DD, HH:MM:SS UTC`.
///
/// Fields come from the UTC calendar and are zero-padded to width 2; the
/// year keeps its natural width. Timestamps outside the representable
/// range yield `NaN` in every field instead of an error.
pub fn format_last_updated(timestamp_ms: i64) -> String {
    // chrono stops near year ±262143, inside this bound; those dates also
    // come back as `None` and render as NaN.
    let date = (timestamp_ms.unsigned_abs() <= MAX_DATE_MILLIS)
        .then(|| DateTime::from_timestamp_millis(timestamp_ms))
        .flatten();

    let Some(date) = date else {
        return INVALID_DATE.to_owned();
    };

    format!(
        "{:02}-{:02}-{:02}, {:02}:{:02}:{:02} UTC",
        date.year(),
        date.month(),
        date.day(),
        date.hour(),
        date.minute(),
        date.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn millis(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap(),
        )
        .timestamp_millis()
    }

    fn matches_shape(s: &str) -> bool {
        let b = s.as_bytes();
        let digit = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);
        b.len() == 24
            && [0, 1, 2, 3, 5, 6, 8, 9, 12, 13, 15, 16, 18, 19]
                .into_iter()
                .all(digit)
            && &s[4..5] == "-"
            && &s[7..8] == "-"
            && &s[10..12] == ", "
            && &s[14..15] == ":"
            && &s[17..18] == ":"
            && &s[20..] == " UTC"
    }

    #[test]
    fn test_epoch() {
        assert_eq!(format_last_updated(0), "1970-01-01, 00:00:00 UTC");
    }

    #[test]
    fn test_single_digit_fields_are_padded() {
        let ts = millis(2024, 3, 7, 9, 5, 2);
        assert_eq!(format_last_updated(ts), "2024-03-07, 09:05:02 UTC");
    }

    #[test]
    fn test_december_month_offset_applied_once() {
        let ts = millis(2023, 12, 31, 23, 59, 59);
        assert_eq!(format_last_updated(ts), "2023-12-31, 23:59:59 UTC");
    }

    #[test]
    fn test_sub_second_precision_truncated() {
        let ts = millis(2024, 3, 7, 9, 15, 2) + 999;
        assert_eq!(format_last_updated(ts), "2024-03-07, 09:15:02 UTC");
    }

    #[test]
    fn test_before_epoch_uses_utc_fields() {
        assert_eq!(format_last_updated(-1000), "1969-12-31, 23:59:59 UTC");
    }

    #[test]
    fn test_shape_holds_across_range() {
        let step = 86_400_000 * 37 + 3_723_000;
        let mut ts = 0_i64;
        for _ in 0..2000 {
            let formatted = format_last_updated(ts);
            assert!(matches_shape(&formatted), "bad shape: {formatted}");
            ts += step;
        }
    }

    #[test]
    fn test_out_of_range_is_nan() {
        assert_eq!(format_last_updated(i64::MAX), INVALID_DATE);
        assert_eq!(format_last_updated(i64::MIN), INVALID_DATE);
        assert_eq!(
            format_last_updated(8_640_000_000_000_001),
            "NaN-NaN-NaN, NaN:NaN:NaN UTC"
        );
    }
}
