#![allow(dead_code)]

use admin_console::application::services::LoginRedirector;
use admin_console::domain::entities::{AuthorizationCode, LoginResponseCode, LoginResult, User};
use admin_console::domain::{ExchangeError, LoginExchange};
use admin_console::infrastructure::token_store::SessionCookie;
use admin_console::state::AppState;
use admin_console::web;
use admin_console::web::middleware::web_auth;
use async_trait::async_trait;
use axum::{Router, middleware};
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

pub const AUTHORIZE_URL: &str = "https://idp.example.com/user_management/authorize";
pub const REDIRECT_URI: &str = "http://localhost:3000/auth/callback";
pub const CLIENT_ID: &str = "client_test";
pub const COOKIE_NAME: &str = "console_token";

/// Login exchange returning a fixed outcome and recording the codes it saw.
pub struct StubExchange {
    outcome: Result<LoginResult, ExchangeError>,
    calls: AtomicUsize,
    codes: Mutex<Vec<String>>,
}

impl StubExchange {
    pub fn returning(outcome: Result<LoginResult, ExchangeError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            codes: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginExchange for StubExchange {
    async fn login(&self, code: &AuthorizationCode) -> Result<LoginResult, ExchangeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.codes.lock().unwrap().push(code.as_str().to_string());
        self.outcome.clone()
    }
}

pub fn login_result(code: Option<&str>, token: Option<&str>) -> LoginResult {
    LoginResult {
        response_code: code.map(|c| LoginResponseCode::from(c.to_string())),
        token: token.map(str::to_string),
        user: Some(User {
            id: "user_01".to_string(),
            email: "ops@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }),
    }
}

pub fn create_test_state(exchange: Arc<dyn LoginExchange>) -> AppState {
    let redirector = LoginRedirector::new(
        Url::parse(AUTHORIZE_URL).unwrap(),
        CLIENT_ID,
        Url::parse(REDIRECT_URI).unwrap(),
    )
    .with_provider(Some("authkit".to_string()));

    let cookie = SessionCookie {
        name: COOKIE_NAME.to_string(),
        ttl_days: 30,
        secure: false,
    };

    AppState::new(redirector, exchange, cookie)
}

/// Console routes with the route guard and without rate limiting.
pub fn console_router(state: AppState) -> Router {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    Router::new()
        .merge(protected)
        .merge(web::routes::public_routes())
        .with_state(state)
}

pub fn console_server(exchange: Arc<dyn LoginExchange>) -> TestServer {
    TestServer::new(console_router(create_test_state(exchange))).unwrap()
}

/// Exchange that must not be reached.
pub fn unused_exchange() -> Arc<StubExchange> {
    StubExchange::returning(Err(ExchangeError::Network("unexpected call".to_string())))
}

/// Value of the session cookie set by a response, if any.
pub fn set_cookie_header(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{COOKIE_NAME}=")))
        .map(str::to_string)
}
