//! Cookie-based route guard middleware for console pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::application::services::{GuardDecision, RouteGuard};
use crate::infrastructure::token_store::CookieTokenStore;
use crate::state::AppState;

/// Guards protected pages on the presence of the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: console_token=<token>
/// ```
///
/// The cookie name comes from [`AppState::session_cookie`].
///
/// # Flow
///
/// 1. Read the request's cookie jar into a [`CookieTokenStore`]
/// 2. Ask [`RouteGuard`] for a decision
/// 3. `Allow` runs the wrapped handler unmodified
/// 4. `Redirect` answers `303 See Other` without running the handler
///
/// The token is not validated here; presence alone grants access.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/dashboard", get(dashboard_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
///
/// # Errors
///
/// Returns `Redirect` to `/login` if the session cookie is missing or empty.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let store = CookieTokenStore::new(
        CookieJar::from_headers(req.headers()),
        st.session_cookie.clone(),
    );

    match RouteGuard::check(&store) {
        GuardDecision::Allow => Ok(next.run(req).await),
        GuardDecision::Redirect(route) => {
            tracing::debug!(path = %req.uri().path(), "No session token, redirecting");
            Err(Redirect::to(route.path()))
        }
    }
}
