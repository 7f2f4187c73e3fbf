//! Click entities recorded when a short link is visited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single visit to a short link.
///
/// Stored in the embedded `clicks` sequence of a [`super::Link`], serialized
/// as `{"ip": .., "timestamp": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub ip: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates an event stamped with the current time.
    pub fn now(ip: Option<String>) -> Self {
        Self {
            ip,
            timestamp: Utc::now(),
        }
    }
}

/// A row of the flat click log kept alongside the embedded sequence.
#[derive(Debug, Clone)]
pub struct ClickLogEntry {
    pub id: i64,
    pub short_url: String,
    pub ip: Option<String>,
    pub timestamp: DateTime<Utc>,
}
