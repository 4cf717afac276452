//! Date parsing helpers for sort and date-range filters.
//!
//! Dates coming from mock data and form inputs use several layouts; they are
//! parsed to an ordinal timestamp before any comparison so ordering never
//! depends on the textual form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse a date or datetime string into a naive timestamp.
/// Example: "2024-03-15T14:02:26Z", "2024/3/5 09:30", "15.03.2024"
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    parse_plain_date(value).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a calendar date, ignoring any time part
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    parse_plain_date(date_part)
}

fn parse_plain_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Format a timestamp as "YYYY-MM-DD HH:MM:SS"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Calendar date from literal parts, used by static mock data.
/// Out-of-range parts give the Unix epoch.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// UTC timestamp from literal parts, see [`ymd`]
pub fn utc_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    ymd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(
            parse_timestamp("2024-03-15 14:02:26"),
            Some(ymd_hms(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26Z"),
            Some(ymd_hms(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024/3/5 09:30"),
            Some(ymd_hms(2024, 3, 5, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("15.03.2024"),
            Some(ymd_hms(2024, 3, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_date_with_time_part() {
        assert_eq!(
            parse_date("2024-03-15 10:00"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date("2024/12/01"), NaiveDate::from_ymd_opt(2024, 12, 1));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_timestamp("invalid"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_non_padded_dates_order_by_time() {
        // Lexicographically "2024/10/1" < "2024/9/30", chronologically not
        let a = parse_timestamp("2024/9/30 00:00").unwrap();
        let b = parse_timestamp("2024/10/1 00:00").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&ymd_hms(2024, 12, 31, 23, 59, 59)),
            "2024-12-31 23:59:59"
        );
    }

    #[test]
    fn test_literal_helpers() {
        assert_eq!(ymd(2024, 3, 15), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(ymd(2024, 2, 30), NaiveDate::default());
        assert_eq!(utc_at(2024, 3, 15, 14, 2).naive_utc(), ymd_hms(2024, 3, 15, 14, 2, 0));
    }
}
