use crate::shared::date_utils;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::borrow::Cow;

/// Typed value of a record field as seen by search, filter and sort
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDateTime),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::text)
    }

    pub fn int(value: impl Into<i64>) -> Self {
        FieldValue::Int(value.into())
    }

    pub fn opt_int(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Missing, |v| FieldValue::Int(v as i64))
    }

    pub fn date(value: NaiveDate) -> Self {
        value
            .and_hms_opt(0, 0, 0)
            .map_or(FieldValue::Missing, FieldValue::Date)
    }

    pub fn timestamp(value: &DateTime<Utc>) -> Self {
        FieldValue::Date(value.naive_utc())
    }

    /// Date-like text: parsed to a timestamp when possible so that sorting
    /// never compares dates as locale-dependent strings
    pub fn date_text(value: &'a str) -> Self {
        match date_utils::parse_timestamp(value) {
            Some(dt) => FieldValue::Date(dt),
            None if value.trim().is_empty() => FieldValue::Missing,
            None => FieldValue::text(value),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Text the free-text search looks at. Only string fields take part.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Natural textual representation; missing values are the empty string
    pub fn sort_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text.as_ref()),
            FieldValue::Int(v) => Cow::Owned(v.to_string()),
            FieldValue::Float(v) => Cow::Owned(v.to_string()),
            FieldValue::Bool(v) => Cow::Owned(v.to_string()),
            FieldValue::Date(v) => Cow::Owned(date_utils::format_datetime(v)),
            FieldValue::Missing => Cow::Borrowed(""),
        }
    }

    /// Numeric view for numeric comparison
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::text(value.as_str())
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_text() {
        assert!(matches!(FieldValue::date_text("2024/9/30"), FieldValue::Date(_)));
        assert_eq!(FieldValue::date_text("n/a"), FieldValue::text("n/a"));
        assert_eq!(FieldValue::date_text("  "), FieldValue::Missing);
    }

    #[test]
    fn test_only_text_is_searchable() {
        assert_eq!(FieldValue::text("abc").search_text(), Some("abc"));
        assert_eq!(FieldValue::Int(5).search_text(), None);
        assert_eq!(FieldValue::Missing.search_text(), None);
    }

    #[test]
    fn test_sort_text_of_missing_is_empty() {
        assert_eq!(FieldValue::Missing.sort_text(), "");
        assert_eq!(FieldValue::Int(42).sort_text(), "42");
    }
}
