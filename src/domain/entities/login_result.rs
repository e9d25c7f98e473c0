//! Result of the login mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionToken;

/// Outcome code returned by the `login` mutation.
///
/// Closed set with an explicit [`LoginResponseCode::Unknown`] variant: codes the
/// console does not know about never match the success or invalid-code paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoginResponseCode {
    LoginSuccess,
    InvalidCode,
    Unknown(String),
}

impl LoginResponseCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::InvalidCode => "INVALID_CODE",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for LoginResponseCode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOGIN_SUCCESS" => Self::LoginSuccess,
            "INVALID_CODE" => Self::InvalidCode,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<LoginResponseCode> for String {
    fn from(code: LoginResponseCode) -> Self {
        match code {
            LoginResponseCode::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LoginResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity attributes of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Transient payload of the `login` mutation.
///
/// Built from the response and consumed immediately by the callback
/// handler; the token is only meaningful when the code is `LOGIN_SUCCESS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    #[serde(default)]
    pub response_code: Option<LoginResponseCode>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResult {
    /// The returned token, if present and non-empty.
    pub fn session_token(&self) -> Option<SessionToken> {
        self.token.as_deref().and_then(SessionToken::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_code_known_values() {
        assert_eq!(
            LoginResponseCode::from("LOGIN_SUCCESS".to_string()),
            LoginResponseCode::LoginSuccess
        );
        assert_eq!(
            LoginResponseCode::from("INVALID_CODE".to_string()),
            LoginResponseCode::InvalidCode
        );
    }

    #[test]
    fn test_response_code_unknown_keeps_raw() {
        let code = LoginResponseCode::from("RATE_LIMITED".to_string());
        assert_eq!(code, LoginResponseCode::Unknown("RATE_LIMITED".to_string()));
        assert_eq!(code.to_string(), "RATE_LIMITED");
    }

    #[test]
    fn test_response_code_is_case_sensitive() {
        let code = LoginResponseCode::from("login_success".to_string());
        assert!(matches!(code, LoginResponseCode::Unknown(_)));
    }

    #[test]
    fn test_login_result_from_mutation_payload() {
        let payload = json!({
            "responseCode": "LOGIN_SUCCESS",
            "token": "jwt-token",
            "user": {
                "id": "42",
                "email": "ada@example.com",
                "firstName": "Ada",
                "lastName": "Lovelace"
            }
        });

        let result: LoginResult = serde_json::from_value(payload).unwrap();

        assert_eq!(result.response_code, Some(LoginResponseCode::LoginSuccess));
        assert_eq!(result.session_token().unwrap().as_str(), "jwt-token");
        let user = result.user.unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
    }

    #[test]
    fn test_login_result_invalid_code_without_token() {
        let payload = json!({ "responseCode": "INVALID_CODE", "token": null, "user": null });

        let result: LoginResult = serde_json::from_value(payload).unwrap();

        assert_eq!(result.response_code, Some(LoginResponseCode::InvalidCode));
        assert!(result.session_token().is_none());
        assert!(result.user.is_none());
    }

    #[test]
    fn test_empty_token_is_not_a_session_token() {
        let result = LoginResult {
            response_code: Some(LoginResponseCode::LoginSuccess),
            token: Some(String::new()),
            user: None,
        };
        assert!(result.session_token().is_none());
    }
}
