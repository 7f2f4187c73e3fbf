//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when a required creation field is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Original URL, username, and link type are required";

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "userName": "alice",
///   "linkType": "promo"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:3000/alice-promo-Zk3x_9QbLw2a" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or any field is missing
/// or empty. Returns 500 if the link cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    payload
        .validate()
        .map_err(|_| AppError::bad_request(MISSING_FIELDS_MESSAGE))?;

    let (Some(original_url), Some(user_name), Some(link_type)) =
        (payload.original_url, payload.user_name, payload.link_type)
    else {
        return Err(AppError::bad_request(MISSING_FIELDS_MESSAGE));
    };

    let link = state
        .link_service
        .create_short_link(original_url, user_name, link_type)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.get_short_url(&link.short_url),
    }))
}
