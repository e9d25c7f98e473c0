//! Cookie-backed token store for browser clients.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::domain::TokenStore;
use crate::domain::entities::SessionToken;

/// Attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub ttl_days: i64,
    pub secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            name: "console_token".to_string(),
            ttl_days: 30,
            secure: true,
        }
    }
}

/// Token store over the client's cookie jar.
///
/// The jar is the client's durable, origin-scoped storage: reads see the
/// cookies sent with the request, writes become `Set-Cookie` headers once the
/// jar is returned from the handler via [`CookieTokenStore::into_jar`].
///
/// The cookie is not encrypted; it carries the token exactly as the login
/// exchange returned it.
#[derive(Debug)]
pub struct CookieTokenStore {
    jar: CookieJar,
    cookie: SessionCookie,
}

impl CookieTokenStore {
    pub fn new(jar: CookieJar, cookie: SessionCookie) -> Self {
        Self { jar, cookie }
    }

    /// Returns the jar carrying any pending cookie changes.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn session_cookie(&self, token: SessionToken) -> Cookie<'static> {
        Cookie::build((self.cookie.name.clone(), token.into_inner()))
            .http_only(true)
            .secure(self.cookie.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::days(self.cookie.ttl_days))
            .build()
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<SessionToken> {
        self.jar
            .get(&self.cookie.name)
            .and_then(|cookie| SessionToken::new(cookie.value()))
    }

    fn set(&mut self, token: SessionToken) {
        let cookie = self.session_cookie(token);
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar.add(cookie);
    }

    fn clear(&mut self) {
        let removal = Cookie::build(self.cookie.name.clone()).path("/");
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar.remove(removal);
    }
}
