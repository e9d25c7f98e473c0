//! Session token storage backends.
//!
//! Provides three implementations of [`crate::domain::TokenStore`]:
//! - [`CookieTokenStore`] - Client cookie jar, used by the web console
//! - [`FileTokenStore`] - Token file, used by the `console` CLI
//! - [`MemoryTokenStore`] - In-process slot for tests and embedding

mod cookie_store;
mod file_store;
mod memory_store;

pub use cookie_store::{CookieTokenStore, SessionCookie};
pub use file_store::FileTokenStore;
pub use memory_store::MemoryTokenStore;
