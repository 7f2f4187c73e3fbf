//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{compose_short_id, generate_token};

/// Maximum number of identifiers tried before creation gives up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of returned short URLs; a trailing
    /// slash is ignored.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link owned by `user_name`.
    ///
    /// # Identifier Generation
    ///
    /// The identifier is `{user_name}-{link_type}-{token}`. Uniqueness is
    /// enforced by the store: on a conflict a fresh token is drawn, up to
    /// 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free identifier was found, the
    /// random source failed, or the store is unavailable.
    pub async fn create_short_link(
        &self,
        original_url: String,
        user_name: String,
        link_type: String,
    ) -> Result<Link, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let token = generate_token()
                .map_err(|e| AppError::internal(format!("Random source failed: {}", e)))?;

            let new_link = NewLink {
                short_url: compose_short_id(&user_name, &link_type, &token),
                original_url: original_url.clone(),
                user_name: user_name.clone(),
                link_type: link_type.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(short_url = %link.short_url, "Created short link");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Short identifier collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Failed to generate unique short URL after {} attempts",
            MAX_ATTEMPTS
        )))
    }

    /// Retrieves a link by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, short_url: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Constructs the fully-qualified short URL for an identifier.
    pub fn get_short_url(&self, short_url: &str) -> String {
        format!("{}/{}", self.base_url, short_url)
    }

    /// Checks that the link store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
