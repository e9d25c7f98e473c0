//! GraphQL documents sent by the console.

/// Exchanges an identity provider authorization code for a session token.
pub const LOGIN_MUTATION: &str = r#"
mutation Login($code: String!) {
  login(code: $code) {
    responseCode
    token
    user {
      id
      email
      firstName
      lastName
    }
  }
}
"#;
