//! `Location` header construction for redirects.
//!
//! Stored URLs are not validated, so they may contain bytes a header value
//! cannot carry. Those bytes are percent-encoded; `%` itself is left alone so
//! URLs that are already encoded pass through unchanged.

use axum::http::HeaderValue;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in addition to controls and non-ASCII bytes.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encodes `url` so it can be sent as a `Location` header.
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION).to_string()
}

/// Builds the `Location` header value for `url`.
///
/// # Errors
///
/// Returns the header error if the encoded URL is still not a valid header
/// value. Encoding leaves only visible ASCII, so this does not happen for any
/// input string.
pub fn location_header(url: &str) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    HeaderValue::from_str(&encode_location(url))
}
