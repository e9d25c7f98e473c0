//! # Admin Console
//!
//! A small administrative console built with Axum: login through an external
//! identity provider, an authorization code exchange over one GraphQL
//! mutation, and a protected dashboard shell.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Token, code and login result types, the
//!   callback state machine, and the token store / login exchange traits
//! - **Application Layer** ([`application`]) - Login redirect, callback,
//!   route guard and logout services
//! - **Infrastructure Layer** ([`infrastructure`]) - GraphQL client and token
//!   stores (cookie, file, memory)
//! - **API Layer** ([`api`]) - Health check, fallback and middleware
//! - **Web Layer** ([`web`]) - Console pages and the route guard middleware
//!
//! ## Login Flow
//!
//! 1. `GET /login` redirects to the identity provider
//! 2. The provider redirects to `GET /auth/callback?code=…`
//! 3. The code is exchanged once via the `login` mutation
//! 4. On success the token is stored in the session cookie and the client is
//!    redirected to `/dashboard`; otherwise an error page links back to `/login`
//!
//! ## Quick Start
//!
//! ```bash
//! export IDP_CLIENT_ID="client_01H..."
//! export IDP_REDIRECT_URI="http://localhost:3000/auth/callback"
//! export GRAPHQL_URL="http://localhost:8000/graphql"
//! export SECURE_COOKIES=false  # local HTTP only
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthCallbackService, GuardDecision, LoginRedirector, RouteGuard,
    };
    pub use crate::domain::entities::{LoginResponseCode, LoginResult, SessionToken};
    pub use crate::domain::{CallbackFailure, CallbackState, LoginExchange, TokenStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
