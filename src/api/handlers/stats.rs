//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats/{short_url}`
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "alice-promo-Zk3x_9QbLw2a",
///   "originalUrl": "https://example.com",
///   "clickCount": 1,
///   "clicks": [{ "ip": "203.0.113.7", "timestamp": "2024-06-01T12:00:00Z" }]
/// }
/// ```
///
/// Clicks are listed in the order they were recorded, without pagination.
///
/// # Errors
///
/// Returns 404 Not Found if the short URL doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link(&short_url).await?;

    Ok(Json(StatsResponse::from(link)))
}
