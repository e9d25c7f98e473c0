//! Access control for protected console pages.

use crate::domain::{Route, TokenStore};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view unmodified.
    Allow,
    /// Send the client elsewhere instead of rendering.
    Redirect(Route),
}

/// Gates protected views on the presence of a session token.
///
/// A pure function of the token store at request time: nothing is cached,
/// and the token itself is not validated. Expiry and signature checks belong
/// to the backend that issued it.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check<S>(store: &S) -> GuardDecision
    where
        S: TokenStore + ?Sized,
    {
        if store.get().is_some() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(Route::Login)
        }
    }
}
