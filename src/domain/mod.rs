//! Domain layer containing the console's authentication model.
//!
//! This module defines entities, the callback state machine and the trait
//! seams (token storage, login exchange) independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (token, code, login result)
//! - [`callback_state`] - `Pending → Success | Failed` state machine
//! - [`token_store`] - Session token storage contract
//! - [`login_exchange`] - Authorization code exchange contract
//! - [`route`] - Navigation targets of the console
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Trait seams are implemented by the infrastructure layer and injected into
//!   services (see [`crate::application::services`])
//!
//! # Login Flow
//!
//! 1. `/login` redirects to the identity provider
//! 2. The identity provider redirects back to `/auth/callback?code=…`
//! 3. The code is exchanged via [`login_exchange::LoginExchange`]
//! 4. On success the token lands in a [`token_store::TokenStore`]

pub mod callback_state;
pub mod entities;
pub mod login_exchange;
pub mod route;
pub mod token_store;

pub use callback_state::{CallbackFailure, CallbackState};
pub use login_exchange::{ExchangeError, LoginExchange};
pub use route::Route;
pub use token_store::TokenStore;

#[cfg(test)]
pub use login_exchange::MockLoginExchange;
