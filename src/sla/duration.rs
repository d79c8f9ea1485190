//! Human-readable duration formatting for SLA messages.
//!
//! Durations are decomposed into days/hours/minutes and rendered as at most
//! two components ("1 day, 2 hours"). Sub-minute durations collapse to
//! "Less than 1 minute"; zero and negative durations render as "0 minutes".

use chrono::Duration;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Format a duration for display in SLA status messages.
///
/// Only the two largest non-zero components are kept, so a duration of
/// 1 day, 2 hours and 15 minutes renders as "1 day, 2 hours".
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    if total_seconds <= 0 {
        return "0 minutes".to_string();
    }

    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(pluralize(days, "day"));
    }
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }

    if parts.is_empty() {
        return "Less than 1 minute".to_string();
    }

    parts.truncate(2);
    parts.join(", ")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
