//! Operational HTTP surface shared by the console.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - Health check and fallback handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Operational route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
