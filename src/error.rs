//! Error taxonomy shared by every component of the dashboard core.
//!
//! Only two operations surface errors to their callers: session persistence and
//! link creation. Collection refreshes degrade silently (see
//! [`crate::application::services::LinkCollectionStore`]).

use thiserror::Error;

/// Fallback shown when the remote API rejects a request without a usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to shorten URL";

#[derive(Debug, Error)]
pub enum AppError {
    /// No persisted session. The caller must navigate back to the entry point.
    #[error("Not signed in")]
    Unauthenticated,

    /// The form was rejected locally before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// The remote API answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Returns true when the caller should redirect to the entry point.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// Message suitable for a blocking user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Remote { message, .. } => message.clone(),
            Self::Unauthenticated => "Please sign in again".to_string(),
            Self::Transport(_) | Self::Decode(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Storage(e) => e.clone(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid form data".to_string());
        Self::Validation { message }
    }
}
