//! Logout handler.

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::application::services::logout;
use crate::infrastructure::token_store::CookieTokenStore;
use crate::state::AppState;

/// Clears the session cookie and returns to the login route.
///
/// # Endpoint
///
/// `POST /logout` (also `GET`)
///
/// Idempotent: logging out without a session still redirects.
pub async fn logout_handler(State(st): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let mut store = CookieTokenStore::new(jar, st.session_cookie.clone());
    let next = logout(&mut store);

    (store.into_jar(), Redirect::to(next.path()))
}
