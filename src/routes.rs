//! Top-level router configuration combining console and operational routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Redirect to `/dashboard` (public)
//! - `GET  /login`         - Redirect to the identity provider (public)
//! - `GET  /auth/callback` - Authorization code exchange (public)
//! - `GET|POST /logout`    - Clear the session (public)
//! - `GET  /dashboard`     - Dashboard shell (session cookie required)
//! - `GET  /health`        - Liveness (public)
//! - `/static/*`           - Static assets
//! - anything else         - JSON `404`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Route guard** - Session cookie presence on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use anyhow::Result;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// The returned service must be served with
/// `into_make_service_with_connect_info::<SocketAddr>` for rate limiting to
/// see client addresses.
///
/// # Errors
///
/// Returns an error if a rate limiter cannot be configured.
pub fn app_router(state: AppState) -> Result<NormalizePath<Router>> {
    let protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::secure_layer()?);

    let public = web::routes::public_routes().layer(rate_limit::layer()?);

    let router = Router::new()
        .merge(protected)
        .merge(public)
        .merge(api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
