//! Parsing of date-bearing document fields.
//!
//! Documents store timestamps as strings written by several producers: date
//! pickers emit ISO 8601, older editors persisted JavaScript's
//! `Date.toString()` and `Date.toDateString()`, hand-typed values use slashes
//! or spelled-out months. A field is a valid date when any of the accepted
//! layouts parses it. Strings outside these layouts are rejected even where a
//! browser's `Date` would guess at them.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Offset-less date-time layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts, interpreted as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    // Date.toDateString(): "Mon Jan 15 2024"
    "%a %b %d %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    // "January 15, 2024" and "Jan 15, 2024"
    "%B %d, %Y",
];

/// Date.toString() without the trailing zone name: "Mon Jan 15 2024 10:30:00 GMT+0000".
const JS_DATE_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parses a document timestamp.
///
/// Returns `None` for empty input and for anything no accepted layout
/// understands (`"invalid date"`, `"2024-13-01"`, ...).
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().fixed_offset());
        }
    }

    // "... GMT+0000 (Coordinated Universal Time)"
    let without_zone_name = value.split(" (").next().unwrap_or(value);
    DateTime::parse_from_str(without_zone_name, JS_DATE_TIME_FORMAT).ok()
}

/// Returns true if `value` parses as a document timestamp.
#[must_use]
pub fn is_valid_timestamp(value: &str) -> bool {
    parse_timestamp(value).is_some()
}
