//! Redirect and template rendering handlers for the console.

mod callback;
mod dashboard;
mod login;
mod logout;
mod root;

pub use callback::{CallbackQuery, callback_handler, failure_status};
pub use dashboard::dashboard_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use root::root_handler;
