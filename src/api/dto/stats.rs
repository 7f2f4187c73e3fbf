//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ClickEvent, Link};

/// Click statistics for a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
    pub clicks: Vec<ClickInfo>,
}

/// Individual click event. `ip` is `null` when unknown.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub ip: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            ip: click.ip,
            timestamp: click.timestamp,
        }
    }
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            short_url: link.short_url,
            original_url: link.original_url,
            click_count: link.click_count,
            clicks: link.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
