//! Login redirect handler.

use axum::{extract::State, response::Redirect};

use crate::state::AppState;

/// Sends the client to the identity provider's hosted login.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Response
///
/// Always `303 See Other` to the authorization URL built by
/// [`crate::application::services::LoginRedirector`]. Failures at the
/// identity provider come back through `/auth/callback`.
pub async fn login_handler(State(st): State<AppState>) -> Redirect {
    let url = st.login_redirector.authorization_url();
    tracing::debug!(authorize_url = %url, "Redirecting to identity provider");
    Redirect::to(url.as_str())
}
