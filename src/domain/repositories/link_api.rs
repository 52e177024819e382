//! Remote shortening API used by the dashboard.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{CreationRequest, CreationResult};
use crate::error::AppError;

/// The remote HTTP API owning the user's links.
///
/// Every call carries the session's bearer token; the token is not verified
/// locally, the server's status code is the authority.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLinkApi`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Fetches the caller's links as raw JSON.
    ///
    /// The body shape is not stable, so decoding is left to
    /// [`crate::application::CollectionShape`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] on a non-success status,
    /// [`AppError::Transport`] on network failure and [`AppError::Decode`] when
    /// the body is not JSON.
    async fn fetch_links(&self, token: &str) -> Result<Value, AppError>;

    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] carrying the server's `message` (or a generic
    /// fallback) on a non-success status, [`AppError::Transport`] on network
    /// failure and [`AppError::Decode`] when the success body is malformed.
    async fn shorten(
        &self,
        token: &str,
        request: &CreationRequest,
    ) -> Result<CreationResult, AppError>;
}
