//! Session token storage contract.

use crate::domain::entities::SessionToken;

/// Single-slot store for the session token.
///
/// The store is the only owner of the token. Route guarding treats a token as
/// valid purely by its presence here; nothing checks expiry or signatures.
///
/// Operations are synchronous and infallible for callers. Implementations
/// backed by fallible media log their failures and report absence.
///
/// # Implementations
///
/// - [`crate::infrastructure::token_store::CookieTokenStore`] - per-client cookie (web)
/// - [`crate::infrastructure::token_store::FileTokenStore`] - token file (CLI)
/// - [`crate::infrastructure::token_store::MemoryTokenStore`] - in-process slot
pub trait TokenStore {
    /// Returns the current token, if any.
    fn get(&self) -> Option<SessionToken>;

    /// Stores `token`, overwriting any existing value.
    fn set(&mut self, token: SessionToken);

    /// Removes the stored token.
    fn clear(&mut self);
}
