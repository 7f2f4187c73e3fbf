//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`            - Create a short link
//! - `GET  /stats/{short_url}`  - Click statistics
//! - `GET  /health`             - Health check
//! - `GET  /{short_url}`        - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{short_url}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/stats/x/` and `/stats/x` hit the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
