//! Persisted keyed-string store holding the session.

use async_trait::async_trait;

use crate::error::AppError;

/// Key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key of the identity label shown in the header.
pub const IDENTITY_KEY: &str = "user_name";
/// Key of the authentication flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// All session keys, cleared together on logout.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, IDENTITY_KEY, AUTH_FLAG_KEY];

/// Local persistent storage of keyed strings.
///
/// Only [`crate::application::services::SessionGate`] talks to this store.
/// Batch writes and removals must be applied atomically: either every entry
/// changes or none does.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileSessionStore`] - JSON file on disk
/// - [`crate::infrastructure::storage::MemorySessionStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads a single value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Writes all entries in one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store cannot be written.
    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), AppError>;

    /// Removes all keys in one atomic step. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store cannot be written.
    async fn remove_many(&self, keys: Vec<String>) -> Result<(), AppError>;
}
