//! Relative "posted" labels such as "3 days ago".
//!
//! Labels are computed once, when a job is written, and never refreshed.
//! The buckets match the `posted_date_to_text` schema migration.

use chrono::{DateTime, Duration, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Label for something that happened `elapsed` ago. Future instants count
/// as "Just now".
pub fn relative_label(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    if secs < MINUTE {
        "Just now".to_string()
    } else if secs < HOUR {
        format!("{} minutes ago", secs / MINUTE)
    } else if secs < DAY {
        format!("{} hours ago", secs / HOUR)
    } else if secs < 2 * DAY {
        "1 day ago".to_string()
    } else if secs < MONTH {
        format!("{} days ago", secs / DAY)
    } else if secs < YEAR {
        format!("{} months ago", secs / MONTH)
    } else {
        format!("{} years ago", secs / YEAR)
    }
}

pub fn label_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_label(now - then)
}
