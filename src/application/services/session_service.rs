//! Session termination.

use tracing::info;

use crate::domain::{Route, TokenStore};

/// Ends the session held by `store`.
///
/// Clears the token and returns the page to navigate to. A guard check
/// afterwards redirects away from protected pages.
pub fn logout<S>(store: &mut S) -> Route
where
    S: TokenStore + ?Sized,
{
    let had_session = store.get().is_some();
    store.clear();
    info!(had_session, "Logged out");
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{GuardDecision, RouteGuard};
    use crate::domain::entities::SessionToken;
    use crate::infrastructure::token_store::MemoryTokenStore;

    #[test]
    fn test_logout_clears_and_navigates_to_login() {
        let mut store = MemoryTokenStore::with_token(SessionToken::new("tok").unwrap());

        let next = logout(&mut store);

        assert_eq!(next, Route::Login);
        assert!(store.get().is_none());
        assert_eq!(
            RouteGuard::check(&store),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_logout_without_session() {
        let mut store = MemoryTokenStore::new();
        assert_eq!(logout(&mut store), Route::Login);
    }
}
