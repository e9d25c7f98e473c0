//! Authorization code received on the identity provider callback.

/// Number of leading characters kept when a code is written to logs.
const LOG_PREFIX_LEN: usize = 10;

/// One-time credential issued by the identity provider in its redirect.
///
/// Consumed by value when it is exchanged, so a single callback cannot
/// exchange the same code twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    /// Extracts a code from the raw `code` query value.
    ///
    /// Absent and empty values both mean "no code".
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        raw.filter(|code| !code.is_empty())
            .map(|code| Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Log-safe form: the first characters followed by `...`.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(LOG_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}
