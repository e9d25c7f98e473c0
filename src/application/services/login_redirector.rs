//! Identity provider login redirect.

use url::Url;

/// Builds the identity provider's hosted login URL.
///
/// The console never renders a login form of its own: `/login` sends the
/// client to this URL, and any failure at the provider comes back as a
/// different callback outcome.
#[derive(Debug, Clone)]
pub struct LoginRedirector {
    authorize_url: Url,
    client_id: String,
    redirect_uri: Url,
    provider: Option<String>,
}

impl LoginRedirector {
    /// Creates a redirector.
    ///
    /// # Arguments
    ///
    /// - `authorize_url` - identity provider authorization endpoint
    /// - `client_id` - client identifier registered with the provider
    /// - `redirect_uri` - the console's `/auth/callback` URL
    pub fn new(authorize_url: Url, client_id: impl Into<String>, redirect_uri: Url) -> Self {
        Self {
            authorize_url,
            client_id: client_id.into(),
            redirect_uri,
            provider: None,
        }
    }

    /// Selects a provider at the identity provider (e.g. `authkit`).
    ///
    /// `None` or an empty string omits the `provider` parameter.
    #[must_use]
    pub fn with_provider(mut self, provider: Option<String>) -> Self {
        self.provider = provider.filter(|p| !p.is_empty());
        self
    }

    /// Returns the authorization URL the client is redirected to.
    pub fn authorization_url(&self) -> Url {
        let mut url = self.authorize_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", self.redirect_uri.as_str())
                .append_pair("response_type", "code");
            if let Some(provider) = &self.provider {
                query.append_pair("provider", provider);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirector() -> LoginRedirector {
        LoginRedirector::new(
            "https://idp.example.com/authorize".parse().unwrap(),
            "client_01ABC",
            "https://console.example.com/auth/callback".parse().unwrap(),
        )
    }

    #[test]
    fn test_authorization_url_parameters() {
        let url = redirector().authorization_url();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("idp.example.com"));
        assert_eq!(url.path(), "/authorize");
        assert!(pairs.contains(&("client_id".into(), "client_01ABC".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "https://console.example.com/auth/callback".into()
        )));
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "provider"));
    }

    #[test]
    fn test_provider_parameter() {
        let url = redirector()
            .with_provider(Some("authkit".to_string()))
            .authorization_url();

        assert!(url.query_pairs().any(|(k, v)| k == "provider" && v == "authkit"));
    }

    #[test]
    fn test_empty_provider_is_omitted() {
        let url = redirector()
            .with_provider(Some(String::new()))
            .authorization_url();

        assert!(!url.query_pairs().any(|(k, _)| k == "provider"));
    }

    #[test]
    fn test_redirect_uri_is_encoded() {
        let url = redirector().authorization_url();
        assert!(
            url.as_str()
                .contains("redirect_uri=https%3A%2F%2Fconsole.example.com%2Fauth%2Fcallback")
        );
    }

    #[test]
    fn test_existing_query_is_preserved() {
        let url = LoginRedirector::new(
            "https://idp.example.com/authorize?tenant=acme".parse().unwrap(),
            "client",
            "https://console.example.com/auth/callback".parse().unwrap(),
        )
        .authorization_url();

        assert!(url.query_pairs().any(|(k, v)| k == "tenant" && v == "acme"));
        assert!(url.query_pairs().any(|(k, _)| k == "client_id"));
    }
}
