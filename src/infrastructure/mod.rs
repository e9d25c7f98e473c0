//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for token storage and the login exchange.
//!
//! # Modules
//!
//! - [`graphql`] - GraphQL client for the backend's `login` mutation
//! - [`token_store`] - Cookie, file and in-memory token stores

pub mod graphql;
pub mod token_store;
