//! State machine of the identity provider callback.
//!
//! ```text
//! Pending ──► Success
//!    │
//!    └──────► Failed(CallbackFailure)
//! ```
//!
//! `Success` and `Failed` are terminal: once reached, further transitions
//! leave the state unchanged.

/// Reasons a callback ends in [`CallbackState::Failed`].
///
/// `Display` yields the exact message rendered to the user. Every variant is
/// presented the same way: the message plus a control that restarts login.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackFailure {
    /// The callback URL carried no `code` parameter.
    #[error("No authorization code found")]
    MissingCode,

    /// The exchange endpoint could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The exchange rejected the code (`INVALID_CODE`).
    #[error("Authentication failed: Invalid authorization code. Please try again.")]
    InvalidCode,

    /// Any other outcome, including a success code without a token.
    #[error("Login failed: {}", .0.as_deref().unwrap_or("Unknown error"))]
    Unrecognized(Option<String>),
}

impl CallbackFailure {
    /// Short machine-readable kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCode => "missing_code",
            Self::Transport(_) => "transport",
            Self::InvalidCode => "invalid_code",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Progress of a single callback invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallbackState {
    /// Exchange not finished yet; rendered as a "completing login" placeholder.
    #[default]
    Pending,
    /// Token stored; the client is sent to the dashboard.
    Success,
    /// Error rendered inline with a retry control.
    Failed(CallbackFailure),
}

impl CallbackState {
    /// `Pending → Success`.
    #[must_use]
    pub fn succeed(self) -> Self {
        match self {
            Self::Pending => Self::Success,
            terminal => terminal,
        }
    }

    /// `Pending → Failed(failure)`.
    #[must_use]
    pub fn fail(self, failure: CallbackFailure) -> Self {
        match self {
            Self::Pending => Self::Failed(failure),
            terminal => terminal,
        }
    }
}
