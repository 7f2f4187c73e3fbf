//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;
use crate::utils::location::location_header;

const SHORTEN_PATH: &str = "shorten";

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Request Flow
///
/// 1. Look up the link by exact short URL
/// 2. Resolve the caller IP (`X-Forwarded-For`, then peer address)
/// 3. Record the click in every configured sink and wait for the writes
/// 4. Return 302 Found with `Location` set to the original URL, with bytes
///    that cannot appear in a header percent-encoded
///
/// # Errors
///
/// Returns 404 Not Found if the short URL doesn't exist; nothing is recorded.
/// Returns 500 if the click cannot be stored; no redirect is issued.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
) -> Result<Response, AppError> {
    redirect(&state, &short_url, ip).await
}

/// `GET /shorten`.
///
/// The path is taken by the create route, so a read of it is resolved as
/// the short identifier `shorten`, which no generated link can have.
pub async fn shorten_path_handler(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
) -> Result<Response, AppError> {
    redirect(&state, SHORTEN_PATH, ip).await
}

async fn redirect(
    state: &AppState,
    short_url: &str,
    ip: Option<String>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link(short_url).await?;

    let location = location_header(&link.original_url).map_err(|e| {
        AppError::internal(format!(
            "Stored URL for {} is not a valid header value: {}",
            short_url, e
        ))
    })?;

    state.click_service.record_click(short_url, ip).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
