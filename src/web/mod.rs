//! Browser-facing console layer.
//!
//! Provides the login redirect, the identity provider callback and the
//! protected dashboard shell. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect and template rendering handlers
//! - [`middleware`] - Route guard over the session cookie
//! - [`routes`] - Console route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
