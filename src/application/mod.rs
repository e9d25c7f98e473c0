//! Application layer services implementing the authentication flow.
//!
//! This layer orchestrates domain operations: it consumes the
//! [`crate::domain::TokenStore`] and [`crate::domain::LoginExchange`] seams and
//! provides a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::login_redirector::LoginRedirector`] - Identity provider login URL
//! - [`services::auth_callback_service::AuthCallbackService`] - Code exchange state machine
//! - [`services::route_guard::RouteGuard`] - Token presence check for protected pages
//! - [`services::session_service::logout`] - Session termination

pub mod services;
