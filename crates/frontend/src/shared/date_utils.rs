/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a timestamp as "YYYY-MM-DD HH:MM UTC" for tooltips
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Human-readable distance between `at` and `now`, e.g. "3 days ago".
/// Timestamps in the future collapse to "just now".
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *at).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else if seconds < 30 * 86_400 {
        (seconds / 86_400, "day")
    } else if seconds < 365 * 86_400 {
        (seconds / (30 * 86_400), "month")
    } else {
        (seconds / (365 * 86_400), "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}
