//! Repository trait for the flat click log.

use crate::domain::entities::{ClickEvent, ClickLogEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only log of click events keyed by short URL.
///
/// Mirrors the embedded click sequence of each Link record in a separate
/// collection for analytics consumers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickLogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryClickLogRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLogRepository: Send + Sync {
    /// Appends a log entry for `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, short_url: &str, click: &ClickEvent)
    -> Result<ClickLogEntry, AppError>;
}
