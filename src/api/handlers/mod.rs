//! HTTP request handlers for operational endpoints.

pub mod health;
pub mod not_found;

pub use health::health_handler;
pub use not_found::not_found_handler;
