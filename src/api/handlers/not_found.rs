//! Fallback for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unknown routes with the JSON error body.
///
/// # Response
///
/// ```json
/// { "error": { "code": "not_found", "message": "Route not found", "details": { "path": "/nope" } } }
/// ```
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
