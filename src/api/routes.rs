//! Operational route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes outside the console flow.
///
/// # Endpoints
///
/// - `GET /health` - Liveness and version
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
