//! In-process repositories backed by tokio locks.
//!
//! Implement the same traits as the PostgreSQL repositories and keep data for
//! the lifetime of the process. Used to exercise handlers without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::{ClickEvent, ClickLogEntry, Link, NewLink};
use crate::domain::repositories::{ClickLogRepository, LinkRepository};
use crate::error::AppError;

/// In-memory Link store keyed by short URL.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.short_url) {
            return Err(AppError::conflict(format!(
                "Short URL already exists: {}",
                new_link.short_url
            )));
        }

        let id = links.len() as i64 + 1;
        let link = Link::new(id, new_link, Utc::now());
        links.insert(link.short_url.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(short_url).cloned())
    }

    async fn append_click(&self, short_url: &str, click: &ClickEvent) -> Result<bool, AppError> {
        match self.links.write().await.get_mut(short_url) {
            Some(link) => {
                link.push_click(click.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory click log.
#[derive(Default)]
pub struct MemoryClickLogRepository {
    entries: Mutex<Vec<ClickLogEntry>>,
}

impl MemoryClickLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries in insertion order.
    pub async fn entries(&self) -> Vec<ClickLogEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl ClickLogRepository for MemoryClickLogRepository {
    async fn record(
        &self,
        short_url: &str,
        click: &ClickEvent,
    ) -> Result<ClickLogEntry, AppError> {
        let mut entries = self.entries.lock().await;

        let entry = ClickLogEntry {
            id: entries.len() as i64 + 1,
            short_url: short_url.to_string(),
            ip: click.ip.clone(),
            timestamp: click.timestamp,
        };
        entries.push(entry.clone());

        Ok(entry)
    }
}
