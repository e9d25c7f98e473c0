//! Contract for exchanging an authorization code for a login result.

use async_trait::async_trait;

use crate::domain::entities::{AuthorizationCode, LoginResult};

/// Transport-level failures while reaching the login exchange endpoint.
///
/// The `Display` output is the message shown to the user, in the same
/// `[Network]` / `[GraphQL]` form the console's GraphQL client reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The request never produced a usable GraphQL response.
    #[error("[Network] {0}")]
    Network(String),

    /// The endpoint answered with GraphQL errors.
    #[error("{}", format_graphql_errors(.0))]
    GraphQl(Vec<String>),
}

fn format_graphql_errors(messages: &[String]) -> String {
    messages
        .iter()
        .map(|message| format!("[GraphQL] {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Performs the `login(code)` mutation.
///
/// # Implementations
///
/// - [`crate::infrastructure::graphql::GraphqlClient`] - GraphQL over HTTP(S)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginExchange: Send + Sync {
    /// Exchanges a single-use authorization code.
    ///
    /// A response with an unrecognised or missing response code is still
    /// `Ok`; interpreting it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError`] when the endpoint cannot be reached or
    /// answers with GraphQL errors.
    async fn login(&self, code: &AuthorizationCode) -> Result<LoginResult, ExchangeError>;
}
