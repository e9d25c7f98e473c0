//! GraphQL integration with the console backend.
//!
//! - [`GraphqlClient`] - HTTP transport, implements [`crate::domain::LoginExchange`]
//! - [`documents`] - Operation documents

mod client;
pub mod documents;

pub use client::GraphqlClient;
