//! Console route configuration.

use crate::domain::Route;
use crate::state::AppState;
use crate::web::handlers::{
    callback_handler, dashboard_handler, login_handler, logout_handler, root_handler,
};
use axum::{Router, routing::get};

/// Protected console routes requiring a session token.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Dashboard shell
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(Route::Dashboard.path(), get(dashboard_handler))
}

/// Public console routes.
///
/// # Endpoints
///
/// - `GET /` - Redirect to the dashboard
/// - `GET /login` - Redirect to the identity provider
/// - `GET /auth/callback` - Authorization code exchange
/// - `GET|POST /logout` - Session termination
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route(Route::Login.path(), get(login_handler))
        .route(Route::AuthCallback.path(), get(callback_handler))
        .route(Route::Logout.path(), get(logout_handler).post(logout_handler))
}
