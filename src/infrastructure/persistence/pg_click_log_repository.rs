//! PostgreSQL implementation of the click log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, ClickLogEntry};
use crate::domain::repositories::ClickLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `click_log` table.
pub struct PgClickLogRepository {
    pool: Arc<PgPool>,
}

impl PgClickLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickLogRow {
    id: i64,
    short_url: String,
    ip: Option<String>,
    clicked_at: DateTime<Utc>,
}

#[async_trait]
impl ClickLogRepository for PgClickLogRepository {
    async fn record(
        &self,
        short_url: &str,
        click: &ClickEvent,
    ) -> Result<ClickLogEntry, AppError> {
        let row = sqlx::query_as::<_, ClickLogRow>(
            r#"
            INSERT INTO click_log (short_url, ip, clicked_at)
            VALUES ($1, $2, $3)
            RETURNING id, short_url, ip, clicked_at
            "#,
        )
        .bind(short_url)
        .bind(&click.ip)
        .bind(click.timestamp)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ClickLogEntry {
            id: row.id,
            short_url: row.short_url,
            ip: row.ip,
            timestamp: row.clicked_at,
        })
    }
}
