//! Repository trait for link storage.

use crate::domain::entities::{ClickEvent, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for Link records.
///
/// The repository exclusively owns Link records. Creation happens once per
/// link; afterwards only the click statistics change, through
/// [`LinkRepository::append_click`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short URL already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact short URL match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and appends `click` to the
    /// embedded click sequence.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the link exists and was updated
    /// - `Ok(false)` if no link matches `short_url`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append_click(&self, short_url: &str, click: &ClickEvent) -> Result<bool, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
