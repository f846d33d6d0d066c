//! Display formatting for dates, times and temperatures.
//!
//! The formatters never fail: unparseable input degrades to [`INVALID_DATE`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Parses the date/time shapes the dashboard receives.
///
/// Values carrying an offset resolve to the wall-clock time in that offset,
/// so `2024-02-10T00:00:00Z` stays on Feb 10 regardless of the host zone.
/// Accepted: RFC 3339, ISO 8601 with or without seconds and offset, RFC 2822
/// (`Sat, 10 Feb 2024 14:30:00 GMT`) and the short forms `YYYY-MM-DD`,
/// `YYYY-MM` and `YYYY`.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }
    if let Some(with_offset) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(with_offset.naive_local());
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc2822(value) {
        return Some(with_offset.naive_local());
    }

    // A trailing `Z` is UTC, whose wall clock is the value as written.
    let local = value.strip_suffix(['Z', 'z']).unwrap_or(value);
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .or_else(|| parse_date_only(local).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

fn parse_date_only(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    let (year, month) = match value.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (value, None),
    };
    let is_digits = |part: &str, len: usize| {
        part.len() == len && part.bytes().all(|byte| byte.is_ascii_digit())
    };
    if !is_digits(year, 4) {
        return None;
    }
    let year = year.parse().ok()?;
    let month = match month {
        Some(month) if is_digits(month, 2) => month.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// `"Mon, Feb 10"`
#[must_use]
pub fn format_date(input: &str) -> String {
    parse_timestamp(input).map_or_else(
        || INVALID_DATE.to_string(),
        |at| at.format("%a, %b %-d").to_string(),
    )
}

/// `"Feb 10, 02:30 PM"`
#[must_use]
pub fn format_time(input: &str) -> String {
    parse_timestamp(input).map_or_else(
        || INVALID_DATE.to_string(),
        |at| at.format("%b %-d, %I:%M %p").to_string(),
    )
}

/// Appends the Celsius unit without rounding: `25.5` → `"25.5°C"`.
#[must_use]
pub fn format_temperature(value: f64) -> String {
    format!("{}°C", display_number(value))
}

fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        value.to_string()
    }
}
