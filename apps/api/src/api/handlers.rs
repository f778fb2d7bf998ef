//! Handlers shared by every controller.

use axum::http::{StatusCode, Uri};

/// Answer an OPTIONS request. The body is always empty.
pub fn options(_path: &str) -> String {
    String::new()
}

/// Axum handler for OPTIONS on any path.
///
/// Mount with `axum::routing::options(options_handler)`.
pub async fn options_handler(uri: Uri) -> (StatusCode, String) {
    (StatusCode::OK, options(uri.path()))
}
