//! Date parsing and display formatting for date picker fields

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use forms_core::prelude::*;

/// Display format used when settings don't provide a usable one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Shorter digit runs are years or ids, not timestamps.
const MIN_TIMESTAMP_DIGITS: usize = 9;

/// Parse a stored date value.
///
/// Accepts RFC 3339, `YYYY-MM-DD[ HH:MM[:SS]]` and Unix timestamps of at
/// least nine digits.
/// Offsets are kept as wall-clock time in their own zone.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if value.len() >= MIN_TIMESTAMP_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        let secs = value.parse::<i64>().ok()?;
        return DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc());
    }

    None
}

/// Format a stored date value for display.
///
/// Empty values stay empty. Values that can't be parsed, or can't be
/// rendered with `format`, are returned unchanged.
pub fn format_datetime(value: &str, format: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    let Some(dt) = parse_datetime(value) else {
        warn!("Unparseable date value {:?}, rendering as-is", value);
        return value.to_string();
    };

    let mut items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!(
            "Invalid date format {:?}, falling back to {:?}",
            format, DEFAULT_DATE_FORMAT
        );
        items = StrftimeItems::new(DEFAULT_DATE_FORMAT).collect();
    }

    let mut out = String::new();
    match write!(out, "{}", dt.format_with_items(items.iter())) {
        Ok(()) => out,
        Err(_) => {
            // e.g. `%z` has nothing to print for a naive time
            warn!("Date format {:?} not applicable to {:?}", format, value);
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        assert_eq!(parse_datetime("2024-03-09 14:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-09T14:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-09 14:30"), Some(expected));
        assert_eq!(parse_datetime("2024-03-09T14:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_datetime("2024-03-09").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_parse_unix_timestamp() {
        let dt = parse_datetime("1700000000").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_short_numbers_are_not_timestamps() {
        assert_eq!(parse_datetime("2024"), None);
        assert_eq!(parse_datetime("12345678"), None);
        assert_eq!(parse_datetime("-1700000000"), None);
        assert_eq!(format_datetime("2024", DEFAULT_DATE_FORMAT), "2024");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("   "), None);
        assert_eq!(parse_datetime("next tuesday"), None);
        assert_eq!(parse_datetime("2024-13-40"), None);
    }

    #[test]
    fn test_format_with_configured_format() {
        assert_eq!(
            format_datetime("2024-03-09 14:30:00", "%d.%m.%Y"),
            "09.03.2024"
        );
        assert_eq!(
            format_datetime("2024-03-09 14:30:00", DEFAULT_DATE_FORMAT),
            "2024-03-09 14:30"
        );
    }

    #[test]
    fn test_format_empty_stays_empty() {
        assert_eq!(format_datetime("", DEFAULT_DATE_FORMAT), "");
    }

    #[test]
    fn test_format_unparseable_rendered_raw() {
        assert_eq!(
            format_datetime("sometime soon", DEFAULT_DATE_FORMAT),
            "sometime soon"
        );
    }

    #[test]
    fn test_format_invalid_format_falls_back() {
        assert_eq!(
            format_datetime("2024-03-09 14:30:00", "%Y-%m-%d %"),
            "2024-03-09 14:30"
        );
    }

    #[test]
    fn test_format_offset_on_naive_time_rendered_raw() {
        assert_eq!(
            format_datetime("2024-03-09 14:30:00", "%Y %z"),
            "2024-03-09 14:30:00"
        );
    }
}
