//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// All fields are optional at the serde level so that missing and empty
/// values are reported the same way by validation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to redirect to. Not checked for being a well-formed URL.
    #[validate(required, length(min = 1))]
    pub original_url: Option<String>,

    #[validate(required, length(min = 1))]
    pub user_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub link_type: Option<String>,
}

/// Response with the fully-qualified short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}
