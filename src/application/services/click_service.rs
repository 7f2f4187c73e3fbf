//! Click recording across independent sinks.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::click_sink::ClickSink;
use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickLogRepository, LinkRepository};
use crate::error::AppError;

/// Records every click into a fixed set of sinks.
///
/// Sinks are awaited one after another, in registration order, so all
/// writes have completed before the caller issues the redirect.
pub struct ClickService {
    sinks: Vec<Arc<dyn ClickSink>>,
}

impl ClickService {
    /// Creates a service writing to `sinks`.
    pub fn new(sinks: Vec<Arc<dyn ClickSink>>) -> Self {
        Self { sinks }
    }

    /// Records a visit to `short_url` from `ip`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns the error of the first required sink that fails. Failures of
    /// optional sinks are logged and ignored.
    pub async fn record_click(
        &self,
        short_url: &str,
        ip: Option<String>,
    ) -> Result<ClickEvent, AppError> {
        let click = ClickEvent::now(ip);

        for sink in &self.sinks {
            match sink.record(short_url, &click).await {
                Ok(()) => {}
                Err(e) if sink.is_required() => return Err(e),
                Err(e) => {
                    tracing::warn!(sink = sink.name(), short_url, "Failed to record click: {}", e);
                }
            }
        }

        tracing::debug!(short_url, ip = ?click.ip, "Click recorded");

        Ok(click)
    }

    /// Names of the configured sinks, in write order.
    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }
}

/// Required sink: the embedded `clicks` sequence of the Link record.
pub struct LinkClickSink {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkClickSink {
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }
}

#[async_trait]
impl ClickSink for LinkClickSink {
    fn name(&self) -> &'static str {
        "links"
    }

    fn is_required(&self) -> bool {
        true
    }

    async fn record(&self, short_url: &str, click: &ClickEvent) -> Result<(), AppError> {
        if self.link_repository.append_click(short_url, click).await? {
            Ok(())
        } else {
            Err(AppError::not_found("URL not found"))
        }
    }
}

/// Optional sink: the flat click log.
pub struct ClickLogSink {
    click_log_repository: Arc<dyn ClickLogRepository>,
}

impl ClickLogSink {
    pub fn new(click_log_repository: Arc<dyn ClickLogRepository>) -> Self {
        Self {
            click_log_repository,
        }
    }
}

#[async_trait]
impl ClickSink for ClickLogSink {
    fn name(&self) -> &'static str {
        "click_log"
    }

    fn is_required(&self) -> bool {
        false
    }

    async fn record(&self, short_url: &str, click: &ClickEvent) -> Result<(), AppError> {
        self.click_log_repository
            .record(short_url, click)
            .await
            .map(|_| ())
    }
}
