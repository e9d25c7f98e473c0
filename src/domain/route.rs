//! Console navigation targets.

/// Pages of the console that the authentication flow navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Entry point; redirects to the identity provider.
    Login,
    /// Identity provider redirect target.
    AuthCallback,
    /// Guarded landing page.
    Dashboard,
    /// Ends the session.
    Logout,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AuthCallback => "/auth/callback",
            Self::Dashboard => "/dashboard",
            Self::Logout => "/logout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::AuthCallback.path(), "/auth/callback");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Logout.path(), "/logout");
    }
}
