//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for Link records.
///
/// Click history is stored in the `clicks` JSONB column, so a record and its
/// statistics are read and written as one row.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_url: String,
    original_url: String,
    user_name: String,
    link_type: String,
    click_count: i64,
    clicks: Json<Vec<ClickEvent>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_url: row.short_url,
            original_url: row.original_url,
            user_name: row.user_name,
            link_type: row.link_type,
            click_count: row.click_count,
            clicks: row.clicks.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_url, original_url, user_name, link_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_url, original_url, user_name, link_type,
                      click_count, clicks, created_at
            "#,
        )
        .bind(&new_link.short_url)
        .bind(&new_link.original_url)
        .bind(&new_link.user_name)
        .bind(&new_link.link_type)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_url, original_url, user_name, link_type,
                   click_count, clicks, created_at
            FROM links
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn append_click(&self, short_url: &str, click: &ClickEvent) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET click_count = click_count + 1,
                clicks = clicks || jsonb_build_array($2::jsonb)
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .bind(Json(click))
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
