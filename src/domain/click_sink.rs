//! Destinations for recorded click events.

use async_trait::async_trait;

use crate::domain::entities::ClickEvent;
use crate::error::AppError;

/// A destination that records click events for a short URL.
///
/// Sinks are independent: each one can be added to or removed from
/// [`crate::application::services::ClickService`] without affecting the
/// others. A failing required sink aborts the redirect; a failing optional
/// sink is only logged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickSink: Send + Sync {
    /// Short name used in logs and health output.
    fn name(&self) -> &'static str;

    /// Whether a failure of this sink must fail the request.
    fn is_required(&self) -> bool;

    /// Records `click` against `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the sink keys clicks by existing
    /// links and none matches. Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, short_url: &str, click: &ClickEvent) -> Result<(), AppError>;
}
