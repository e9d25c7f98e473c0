//! GraphQL-over-HTTP client for the console backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::documents::LOGIN_MUTATION;
use crate::domain::entities::{AuthorizationCode, LoginResult};
use crate::domain::{ExchangeError, LoginExchange};

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize + ?Sized> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphqlResponse<D> {
    #[serde(default = "Option::default")]
    data: Option<D>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorBody>>,
}

#[derive(Deserialize)]
struct GraphqlErrorBody {
    message: String,
}

#[derive(Serialize)]
struct LoginVariables<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct LoginData {
    login: Option<LoginResult>,
}

/// Client for the console's GraphQL endpoint.
///
/// Requests are `POST`ed as JSON `{"query", "variables"}`. Response
/// envelopes map onto [`ExchangeError`]:
///
/// - `errors` present → [`ExchangeError::GraphQl`] (one message per error)
/// - transport failure, non-2xx without GraphQL errors, or undecodable body →
///   [`ExchangeError::Network`]
pub struct GraphqlClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl GraphqlClient {
    /// Creates a client for `endpoint` with a default HTTP client.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Use a custom HTTP client (timeouts, connection pool reuse, testing).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes a GraphQL document and decodes its `data` field.
    ///
    /// # Errors
    ///
    /// See the type-level documentation for the error mapping.
    pub async fn execute<V, D>(&self, document: &str, variables: &V) -> Result<D, ExchangeError>
    where
        V: Serialize + ?Sized + Sync,
        D: DeserializeOwned,
    {
        let request = GraphqlRequest {
            query: document,
            variables,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        debug!(status = status.as_u16(), "GraphQL response received");

        let envelope: GraphqlResponse<D> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ExchangeError::Network(format!("HTTP {status}")));
            }
            Err(e) => {
                return Err(ExchangeError::Network(format!(
                    "Invalid GraphQL response: {e}"
                )));
            }
        };

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            return Err(ExchangeError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        if !status.is_success() {
            return Err(ExchangeError::Network(format!("HTTP {status}")));
        }

        envelope
            .data
            .ok_or_else(|| ExchangeError::Network("GraphQL response contained no data".to_string()))
    }
}

#[async_trait]
impl LoginExchange for GraphqlClient {
    async fn login(&self, code: &AuthorizationCode) -> Result<LoginResult, ExchangeError> {
        let variables = LoginVariables {
            code: code.as_str(),
        };

        let data: LoginData = self.execute(LOGIN_MUTATION, &variables).await?;

        // A null `login` field carries no response code and falls through to
        // the unknown-error path.
        Ok(data.login.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let variables = LoginVariables { code: "abc" };
        let request = GraphqlRequest {
            query: LOGIN_MUTATION,
            variables: &variables,
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["variables"], json!({ "code": "abc" }));
        assert!(body["query"].as_str().unwrap().contains("login(code: $code)"));
    }

    #[test]
    fn test_envelope_with_null_login() {
        let envelope: GraphqlResponse<LoginData> =
            serde_json::from_value(json!({ "data": { "login": null } })).unwrap();

        let data = envelope.data.unwrap();
        assert!(data.login.is_none());
    }

    #[test]
    fn test_envelope_with_errors_and_null_data() {
        let envelope: GraphqlResponse<LoginData> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "boom", "locations": [] }]
        }))
        .unwrap();

        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.unwrap()[0].message, "boom");
    }

    #[test]
    fn test_endpoint_accessor() {
        let client = GraphqlClient::new("http://localhost:8000/graphql".parse().unwrap());
        assert_eq!(client.endpoint().as_str(), "http://localhost:8000/graphql");
    }
}
