//! Session token entity.

use std::fmt;

/// Opaque credential proving an authenticated console session.
///
/// Never empty. The value is only reachable through [`SessionToken::as_str`];
/// `Debug` output is redacted so tokens cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token, returning `None` for empty input.
    ///
    /// Any other value is kept byte-for-byte; the token is opaque.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_rejects_empty() {
        assert!(SessionToken::new("").is_none());
    }

    #[test]
    fn test_session_token_keeps_whitespace_value() {
        let token = SessionToken::new("   ").unwrap();
        assert_eq!(token.as_str(), "   ");
    }

    #[test]
    fn test_session_token_keeps_value() {
        let token = SessionToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig").unwrap();
        assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.payload.sig");
        assert_eq!(token.into_inner(), "eyJhbGciOiJIUzI1NiJ9.payload.sig");
    }

    #[test]
    fn test_session_token_debug_is_redacted() {
        let token = SessionToken::new("secret-value").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-value"));
    }
}
