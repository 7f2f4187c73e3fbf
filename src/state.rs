//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickLogSink, ClickService, LinkClickSink, LinkService};
use crate::domain::click_sink::ClickSink;
use crate::domain::repositories::{ClickLogRepository, LinkRepository};

/// Services shared by all handlers.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    ///
    /// The embedded click sequence is always recorded. When `click_log` is
    /// `Some`, each click is mirrored into the flat click log as well.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_log: Option<Arc<dyn ClickLogRepository>>,
        base_url: impl Into<String>,
    ) -> Self {
        let mut sinks: Vec<Arc<dyn ClickSink>> =
            vec![Arc::new(LinkClickSink::new(link_repository.clone()))];

        if let Some(click_log) = click_log {
            sinks.push(Arc::new(ClickLogSink::new(click_log)));
        }

        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url)),
            click_service: Arc::new(ClickService::new(sinks)),
        }
    }
}
