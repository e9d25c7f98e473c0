//! Core domain entities of the console's authentication flow.
//!
//! Entities are plain data structures; the decisions made with them live in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`SessionToken`] - Opaque credential held by a token store
//! - [`AuthorizationCode`] - Single-use code from the identity provider redirect
//! - [`LoginResult`] - Transient payload of the login mutation
//! - [`LoginResponseCode`] - Closed set of login outcome codes
//! - [`User`] - Identity attributes returned with a successful login

pub mod authorization_code;
pub mod login_result;
pub mod session_token;

pub use authorization_code::AuthorizationCode;
pub use login_result::{LoginResponseCode, LoginResult, User};
pub use session_token::SessionToken;
