//! Business logic services for the application layer.

pub mod auth_callback_service;
pub mod login_redirector;
pub mod route_guard;
pub mod session_service;

pub use auth_callback_service::AuthCallbackService;
pub use login_redirector::LoginRedirector;
pub use route_guard::{GuardDecision, RouteGuard};
pub use session_service::logout;
