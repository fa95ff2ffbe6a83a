use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::json;

use crate::error::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 1440;

const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Folds any minute count into `[0, 1440)`.
pub fn normalize_minutes(minutes: i64) -> i64 {
    ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY
}

/// Parses an `HH:MM` clock reading into minutes since midnight.
pub fn parse_time_of_day(value: &str) -> AppResult<i64> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(minutes_from_midnight)
        .map_err(|err| {
            AppError::validation_with_details(
                "invalid time of day",
                json!({"value": value, "error": err.to_string()}),
            )
        })
}

/// Parses a zone-naive wall-clock reading such as `2026-01-31T09:00`.
pub fn parse_local_datetime(value: &str) -> AppResult<NaiveDateTime> {
    let trimmed = value.trim();
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            AppError::validation_with_details("invalid local date/time", json!({"value": value}))
        })
}

pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    (time.hour() as i64) * 60 + (time.minute() as i64)
}

pub fn minutes_of_day(value: NaiveDateTime) -> i64 {
    minutes_from_midnight(value.time())
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Places a minute offset on a calendar day; offsets outside `[0, 1440)` spill
/// into the neighbouring days.
pub fn anchor_on_day(date: NaiveDate, minutes: i64) -> NaiveDateTime {
    start_of_day(date) + Duration::minutes(minutes)
}

/// Half-open interval overlap.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

pub fn format_time_of_day(minutes: i64) -> String {
    let normalized = normalize_minutes(minutes);
    format!("{:02}:{:02}", normalized / 60, normalized % 60)
}

pub fn format_time_12h(minutes: i64) -> String {
    let normalized = normalize_minutes(minutes);
    let hours = normalized / 60;
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        other => other,
    };
    format!("{}:{:02} {}", display_hours, normalized % 60, suffix)
}

/// Human duration such as `3h 30m`, `2h` or `45 mins`.
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{} mins", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
