//! Identity provider callback handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::domain::{CallbackFailure, CallbackState, Route};
use crate::infrastructure::token_store::CookieTokenStore;
use crate::state::AppState;

/// Query parameters of the callback. Only `code` is consumed.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// Inline failure page with a retry link.
#[derive(Template, WebTemplate)]
#[template(path = "callback_error.html")]
struct CallbackErrorTemplate {
    message: String,
    retry_path: &'static str,
}

/// Placeholder shown while the exchange has not settled.
#[derive(Template, WebTemplate)]
#[template(path = "callback_pending.html")]
struct CallbackPendingTemplate {}

/// Completes a login by exchanging the authorization code.
///
/// # Endpoint
///
/// `GET /auth/callback?code=<authorization code>`
///
/// # Responses
///
/// - **303 See Other** to `/dashboard` with the session cookie set
/// - **400 Bad Request** when no code was supplied
/// - **401 Unauthorized** when the backend rejects the code
/// - **502 Bad Gateway** on transport errors or an unrecognized response
///
/// Failures render `templates/callback_error.html` with the failure message
/// and a "Try Again" link to `/login`; the cookie jar is left untouched.
pub async fn callback_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let mut store = CookieTokenStore::new(jar, st.session_cookie.clone());

    match st
        .auth_callback
        .complete(query.code.as_deref(), &mut store)
        .await
    {
        CallbackState::Success => {
            (store.into_jar(), Redirect::to(Route::Dashboard.path())).into_response()
        }
        CallbackState::Failed(failure) => (
            failure_status(&failure),
            CallbackErrorTemplate {
                message: failure.to_string(),
                retry_path: Route::Login.path(),
            },
        )
            .into_response(),
        CallbackState::Pending => CallbackPendingTemplate {}.into_response(),
    }
}

/// HTTP status of the failure page for each failure kind.
pub fn failure_status(failure: &CallbackFailure) -> StatusCode {
    match failure {
        CallbackFailure::MissingCode => StatusCode::BAD_REQUEST,
        CallbackFailure::InvalidCode => StatusCode::UNAUTHORIZED,
        CallbackFailure::Transport(_) | CallbackFailure::Unrecognized(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_status() {
        assert_eq!(
            failure_status(&CallbackFailure::MissingCode),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            failure_status(&CallbackFailure::InvalidCode),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            failure_status(&CallbackFailure::Transport("[Network] timeout".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            failure_status(&CallbackFailure::Unrecognized(None)),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_template_escapes_message() {
        let page = CallbackErrorTemplate {
            message: "[GraphQL] <script>".to_string(),
            retry_path: Route::Login.path(),
        }
        .render()
        .unwrap();

        assert!(page.contains("Authentication Error"));
        assert!(page.contains("Try Again"));
        assert!(page.contains("href=\"/login\""));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_pending_template() {
        let page = CallbackPendingTemplate {}.render().unwrap();
        assert!(page.contains("Completing login..."));
    }
}
