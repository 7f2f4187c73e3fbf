//! API route configuration.

use crate::api::handlers::{shorten_handler, shorten_path_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short link
/// - `GET  /shorten`             - Resolved like any short identifier (404)
/// - `GET  /stats/{short_url}`   - Click statistics for a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler).get(shorten_path_handler))
        .route("/stats/{short_url}", get(stats_handler))
}
