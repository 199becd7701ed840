//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbox entry. The ledger keeps these newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique within the collection, strictly increasing in assignment order
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    #[serde(default)]
    pub read: bool,
    /// Creation instant, ms since the epoch on the wire. Records inherited
    /// from older stores may lack it until the backfill pass runs.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Cached relative-time label, recomputable from `timestamp`
    #[serde(default)]
    pub time: String,
}

/// Payload for a new notification before the ledger assigns id, timestamp
/// and label.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub read: bool,
}

impl NotificationDraft {
    /// A draft that starts unread.
    pub fn unread(title: &str, subtitle: &str, icon: &str) -> Self {
        NotificationDraft {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            icon: icon.to_string(),
            read: false,
        }
    }
}
