//! Dashboard shell handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::Route;

/// Template for the dashboard shell.
///
/// Renders `templates/dashboard.html` with:
/// - Welcome panel
/// - Users, Settings and Analytics cards
/// - Logout form
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub logout_path: &'static str,
}

/// Renders the dashboard shell.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// Only reachable through [`crate::web::middleware::web_auth`].
///
/// # Template
///
/// Uses `templates/dashboard.html` for server-side rendering.
pub async fn dashboard_handler() -> impl IntoResponse {
    DashboardTemplate {
        logout_path: Route::Logout.path(),
    }
}
