use axum::response::Redirect;

use crate::domain::Route;

/// `GET /` lands on the dashboard; the guard takes it from there.
pub async fn root_handler() -> Redirect {
    Redirect::to(Route::Dashboard.path())
}
