//! Relative-time labels for ledger records
//!
//! Labels are pure functions of the stored timestamp and the evaluation
//! instant, so they can be recomputed at any later time without the stored
//! label being ground truth.

use chrono::{DateTime, Local, Utc};

/// Render the elapsed time between `timestamp` and `now` as a short label.
///
/// Under a minute the label is "Just now"; up to a week it counts minutes,
/// hours or days ("1 minute ago", "2 hours ago"); older records show a
/// short month and day in the local timezone ("Jan 5"), no year.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!(
            "{} {} ago",
            minutes,
            if minutes == 1 { "minute" } else { "minutes" }
        )
    } else if hours < 24 {
        format!("{} {} ago", hours, if hours == 1 { "hour" } else { "hours" })
    } else if days < 7 {
        format!("{} {} ago", days, if days == 1 { "day" } else { "days" })
    } else {
        timestamp.with_timezone(&Local).format("%b %-d").to_string()
    }
}
