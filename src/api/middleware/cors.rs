//! Cross-origin request handling.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// Short links are created from browser front-ends hosted on other origins,
/// and no endpoint relies on cookies.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
