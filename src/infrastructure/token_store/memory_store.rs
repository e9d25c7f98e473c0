//! In-process token store.

use tracing::debug;

use crate::domain::TokenStore;
use crate::domain::entities::SessionToken;

/// A token store holding the token in memory.
///
/// # Use Cases
///
/// - Unit tests of the callback and guard logic without any storage medium
/// - Embedding the flow in a long-running process that owns its session
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<SessionToken>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<SessionToken> {
        self.token.clone()
    }

    fn set(&mut self, token: SessionToken) {
        debug!("Session token stored in memory");
        self.token = Some(token);
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
