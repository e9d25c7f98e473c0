//! Identity provider callback handling.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{AuthorizationCode, LoginResponseCode, LoginResult, SessionToken};
use crate::domain::{CallbackFailure, CallbackState, LoginExchange, TokenStore};

/// Completes a login from the identity provider's redirect.
///
/// Drives [`CallbackState`] from `Pending` to a terminal state:
///
/// 1. No `code` → `Failed(MissingCode)`, no network call
/// 2. Exactly one [`LoginExchange::login`] call with the code
/// 3. Transport error → `Failed(Transport)` with the error message
/// 4. `LOGIN_SUCCESS` with a non-empty token → token written to the store,
///    `Success`
/// 5. `INVALID_CODE` → `Failed(InvalidCode)`
/// 6. Anything else → `Failed(Unrecognized)` carrying the raw code
///
/// The store is written at most once and only on success. Retries are never
/// automatic; a reused code comes back as `INVALID_CODE`.
pub struct AuthCallbackService {
    exchange: Arc<dyn LoginExchange>,
}

impl AuthCallbackService {
    /// Creates a callback service using `exchange` for the login mutation.
    pub fn new(exchange: Arc<dyn LoginExchange>) -> Self {
        Self { exchange }
    }

    /// Runs the callback for the raw `code` query value.
    ///
    /// Returns the terminal state; the caller renders it (redirect on
    /// `Success`, inline error on `Failed`).
    pub async fn complete<S>(&self, code: Option<&str>, store: &mut S) -> CallbackState
    where
        S: TokenStore + ?Sized,
    {
        let state = CallbackState::Pending;

        let Some(code) = AuthorizationCode::from_query(code) else {
            warn!(reason = "missing_code", "Login callback failed");
            return state.fail(CallbackFailure::MissingCode);
        };

        info!(code = %code.redacted(), "Exchanging authorization code");

        let result = match self.exchange.login(&code).await {
            Ok(result) => result,
            Err(e) => {
                warn!(code = %code.redacted(), error = %e, "Login exchange failed");
                return state.fail(CallbackFailure::Transport(e.to_string()));
            }
        };

        let user_id = result.user.as_ref().map(|u| u.id.clone());

        match interpret(result) {
            Ok(token) => {
                store.set(token);
                info!(user_id = user_id.as_deref().unwrap_or("-"), "Login successful");
                state.succeed()
            }
            Err(failure) => {
                warn!(
                    code = %code.redacted(),
                    reason = failure.kind(),
                    error = %failure,
                    "Login callback failed"
                );
                state.fail(failure)
            }
        }
    }
}

/// Maps a login result onto the token to store or the failure to show.
///
/// A success code without a usable token is a server contract violation and
/// takes the same path as an unknown code.
fn interpret(result: LoginResult) -> Result<SessionToken, CallbackFailure> {
    let token = result.session_token();

    match (result.response_code, token) {
        (Some(LoginResponseCode::LoginSuccess), Some(token)) => Ok(token),
        (Some(LoginResponseCode::InvalidCode), _) => Err(CallbackFailure::InvalidCode),
        (code, _) => Err(CallbackFailure::Unrecognized(
            code.map(String::from).filter(|c| !c.is_empty()),
        )),
    }
}
