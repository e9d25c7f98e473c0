//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! ```bash
//! export IDP_CLIENT_ID="client_01H..."
//! export IDP_REDIRECT_URI="https://console.example.com/auth/callback"
//! export GRAPHQL_URL="https://api.example.com/graphql"
//! ```
//!
//! ## Optional Variables
//!
//! - `IDP_AUTHORIZE_URL` - Identity provider authorization endpoint
//!   (default: `https://api.workos.com/user_management/authorize`)
//! - `IDP_PROVIDER` - `provider` parameter of the authorization URL
//!   (default: `authkit`; set empty to omit)
//! - `GRAPHQL_TIMEOUT_SECONDS` - Login exchange timeout (default: none)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_COOKIE_NAME` - Session cookie name (default: `console_token`)
//! - `SESSION_TTL_DAYS` - Session cookie lifetime in days (default: 30)
//! - `SECURE_COOKIES` - Mark the session cookie `Secure` (default: `true`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::LoginRedirector;
use crate::infrastructure::graphql::GraphqlClient;
use crate::infrastructure::token_store::SessionCookie;
use crate::utils::url_validator::{mask_credentials, parse_http_url};

const DEFAULT_AUTHORIZE_URL: &str = "https://api.workos.com/user_management/authorize";
const DEFAULT_PROVIDER: &str = "authkit";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Identity provider ───────────────────────────────────────────────────
    /// Client identifier registered with the identity provider (`IDP_CLIENT_ID`).
    pub idp_client_id: String,
    /// The console's callback URL as registered with the provider (`IDP_REDIRECT_URI`).
    pub idp_redirect_uri: String,
    pub idp_authorize_url: String,
    /// `None` when `IDP_PROVIDER` is set to an empty string.
    pub idp_provider: Option<String>,

    // ── Backend ─────────────────────────────────────────────────────────────
    /// GraphQL endpoint serving the `login` mutation (`GRAPHQL_URL`).
    pub graphql_url: String,
    /// Upper bound for the login exchange. `None` waits indefinitely.
    pub graphql_timeout_seconds: Option<u64>,

    // ── Session cookie ──────────────────────────────────────────────────────
    pub session_cookie_name: String,
    pub session_ttl_days: i64,
    /// Disable only for local development over plain HTTP.
    pub secure_cookies: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let idp_client_id = env::var("IDP_CLIENT_ID").context("IDP_CLIENT_ID must be set")?;
        let idp_redirect_uri =
            env::var("IDP_REDIRECT_URI").context("IDP_REDIRECT_URI must be set")?;
        let idp_authorize_url =
            env::var("IDP_AUTHORIZE_URL").unwrap_or_else(|_| DEFAULT_AUTHORIZE_URL.to_string());
        let idp_provider = Self::load_provider();

        let graphql_url = env::var("GRAPHQL_URL").context("GRAPHQL_URL must be set")?;

        let graphql_timeout_seconds = match env::var("GRAPHQL_TIMEOUT_SECONDS") {
            Ok(v) if !v.is_empty() => Some(
                v.parse()
                    .with_context(|| format!("GRAPHQL_TIMEOUT_SECONDS is not a number: '{v}'"))?,
            ),
            _ => None,
        };

        let session_cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "console_token".to_string());

        let session_ttl_days = match env::var("SESSION_TTL_DAYS") {
            Ok(v) if !v.is_empty() => v
                .parse()
                .with_context(|| format!("SESSION_TTL_DAYS is not a number: '{v}'"))?,
            _ => 30,
        };

        let secure_cookies = env::var("SECURE_COOKIES")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            idp_client_id,
            idp_redirect_uri,
            idp_authorize_url,
            idp_provider,
            graphql_url,
            graphql_timeout_seconds,
            session_cookie_name,
            session_ttl_days,
            secure_cookies,
        })
    }

    /// Loads the authorization URL `provider` parameter.
    ///
    /// Unset falls back to the default provider; an empty value disables it.
    fn load_provider() -> Option<String> {
        match env::var("IDP_PROVIDER") {
            Ok(provider) if provider.trim().is_empty() => None,
            Ok(provider) => Some(provider.trim().to_string()),
            Err(_) => Some(DEFAULT_PROVIDER.to_string()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any configured URL is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the session cookie name is empty or the TTL is outside 1..=365 days
    /// - the GraphQL timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.idp_client_id.trim().is_empty() {
            anyhow::bail!("IDP_CLIENT_ID must not be empty");
        }

        parse_http_url(&self.idp_redirect_uri).context("IDP_REDIRECT_URI is invalid")?;
        parse_http_url(&self.idp_authorize_url).context("IDP_AUTHORIZE_URL is invalid")?;
        parse_http_url(&self.graphql_url).context("GRAPHQL_URL is invalid")?;

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_cookie_name.is_empty()
            || !self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "SESSION_COOKIE_NAME must be non-empty and contain only [A-Za-z0-9_-], got '{}'",
                self.session_cookie_name
            );
        }

        if !(1..=365).contains(&self.session_ttl_days) {
            anyhow::bail!(
                "SESSION_TTL_DAYS must be between 1 and 365, got {}",
                self.session_ttl_days
            );
        }

        if self.graphql_timeout_seconds == Some(0) {
            anyhow::bail!("GRAPHQL_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Builds the login redirector from the identity provider settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL does not pass validation.
    pub fn login_redirector(&self) -> Result<LoginRedirector> {
        let authorize_url =
            parse_http_url(&self.idp_authorize_url).context("IDP_AUTHORIZE_URL is invalid")?;
        let redirect_uri =
            parse_http_url(&self.idp_redirect_uri).context("IDP_REDIRECT_URI is invalid")?;

        Ok(
            LoginRedirector::new(authorize_url, self.idp_client_id.clone(), redirect_uri)
                .with_provider(self.idp_provider.clone()),
        )
    }

    /// Builds the GraphQL client, applying the optional timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `GRAPHQL_URL` is invalid or the HTTP client
    /// cannot be constructed.
    pub fn graphql_client(&self) -> Result<GraphqlClient> {
        let endpoint = parse_http_url(&self.graphql_url).context("GRAPHQL_URL is invalid")?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(seconds) = self.graphql_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(GraphqlClient::new(endpoint).with_http_client(http))
    }

    /// Session cookie attributes for the web token store.
    pub fn session_cookie(&self) -> SessionCookie {
        SessionCookie {
            name: self.session_cookie_name.clone(),
            ttl_days: self.session_ttl_days,
            secure: self.secure_cookies,
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Identity provider: {}", self.idp_authorize_url);
        tracing::info!("  Client ID: {}", self.idp_client_id);
        tracing::info!("  Redirect URI: {}", self.idp_redirect_uri);
        tracing::info!("  GraphQL endpoint: {}", mask_credentials(&self.graphql_url));

        match self.graphql_timeout_seconds {
            Some(seconds) => tracing::info!("  GraphQL timeout: {}s", seconds),
            None => tracing::info!("  GraphQL timeout: none"),
        }

        tracing::info!(
            "  Session cookie: {} ({} days, secure: {})",
            self.session_cookie_name,
            self.session_ttl_days,
            self.secure_cookies
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
