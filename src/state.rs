//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthCallbackService, LoginRedirector};
use crate::domain::LoginExchange;
use crate::infrastructure::token_store::SessionCookie;

/// Services and settings shared by every request.
///
/// Holds no per-user data: the session token lives in each request's
/// cookie jar and is reached through [`crate::infrastructure::token_store::CookieTokenStore`].
#[derive(Clone)]
pub struct AppState {
    pub login_redirector: Arc<LoginRedirector>,
    pub auth_callback: Arc<AuthCallbackService>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    pub fn new(
        login_redirector: LoginRedirector,
        exchange: Arc<dyn LoginExchange>,
        session_cookie: SessionCookie,
    ) -> Self {
        Self {
            login_redirector: Arc::new(login_redirector),
            auth_callback: Arc::new(AuthCallbackService::new(exchange)),
            session_cookie,
        }
    }
}
