//! Session gate: sole owner of the persisted session.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{Credentials, Session};
use crate::domain::repositories::{
    AUTH_FLAG_KEY, IDENTITY_KEY, SESSION_KEYS, SessionStore, TOKEN_KEY,
};
use crate::error::AppError;

/// Outcome of [`SessionGate::acquire`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(Session),
    /// No usable token. The caller must navigate to the entry point.
    Unauthenticated,
}

/// Reads, writes and invalidates the persisted session.
///
/// No other component touches the [`SessionStore`]. Every [`Session`] handed out
/// is stamped with the gate's generation; [`SessionGate::logout`] advances the
/// generation so results of requests issued under an older session can be
/// recognised and discarded via [`SessionGate::is_current`].
pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    generation: AtomicU64,
}

impl SessionGate {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// Reads the persisted token and identity label.
    ///
    /// Read-only. A missing or blank token yields [`SessionState::Unauthenticated`];
    /// so does a storage read failure, which is logged.
    pub async fn acquire(&self) -> SessionState {
        let token = match self.store.get(TOKEN_KEY).await {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => {
                tracing::debug!("No persisted session token");
                return SessionState::Unauthenticated;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session token");
                return SessionState::Unauthenticated;
            }
        };

        let identity_label = self
            .store
            .get(IDENTITY_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read identity label");
                None
            })
            .unwrap_or_default();

        let session = Session::new(token, identity_label, self.current_generation());
        tracing::debug!(?session, "Session acquired");
        SessionState::Authenticated(session)
    }

    /// Persists credentials issued by the sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank token and
    /// [`AppError::Storage`] if the store cannot be written.
    pub async fn establish(&self, credentials: Credentials) -> Result<(), AppError> {
        let token = credentials.token.trim();
        if token.is_empty() {
            return Err(AppError::validation("Token must not be empty"));
        }

        self.store
            .set_many(vec![
                (TOKEN_KEY.to_string(), token.to_string()),
                (
                    IDENTITY_KEY.to_string(),
                    credentials.identity_label.trim().to_string(),
                ),
                (AUTH_FLAG_KEY.to_string(), "true".to_string()),
            ])
            .await?;

        tracing::info!(identity = %credentials.identity_label.trim(), "Session established");
        Ok(())
    }

    /// Clears the persisted session and invalidates every outstanding [`Session`].
    ///
    /// Never contacts the remote API. The generation advances before the store is
    /// touched, so in-flight results are discarded even if clearing fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be written.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.generation.fetch_add(1, Ordering::SeqCst);

        self.store
            .remove_many(SESSION_KEYS.iter().map(|k| k.to_string()).collect())
            .await?;

        tracing::info!("Session cleared");
        Ok(())
    }

    /// Whether results obtained with `session` may still be applied.
    pub fn is_current(&self, session: &Session) -> bool {
        session.generation() == self.current_generation()
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionStore;
    use mockall::predicate::eq;

    fn store_with(token: Option<&'static str>, label: Option<&'static str>) -> MockSessionStore {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .with(eq(TOKEN_KEY))
            .returning(move |_| Ok(token.map(str::to_string)));
        store
            .expect_get()
            .with(eq(IDENTITY_KEY))
            .returning(move |_| Ok(label.map(str::to_string)));
        store
    }

    #[tokio::test]
    async fn test_acquire_without_token_is_unauthenticated() {
        let gate = SessionGate::new(Arc::new(store_with(None, Some("alice"))));
        assert_eq!(gate.acquire().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_acquire_blank_token_is_unauthenticated() {
        let gate = SessionGate::new(Arc::new(store_with(Some("   "), None)));
        assert_eq!(gate.acquire().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_acquire_returns_token_and_label() {
        let gate = SessionGate::new(Arc::new(store_with(Some("tok-123456789"), Some("alice"))));

        match gate.acquire().await {
            SessionState::Authenticated(session) => {
                assert_eq!(session.token(), "tok-123456789");
                assert_eq!(session.identity_label(), "alice");
                assert!(gate.is_current(&session));
            }
            SessionState::Unauthenticated => panic!("expected a session"),
        }
    }

    #[tokio::test]
    async fn test_acquire_storage_failure_is_unauthenticated() {
        let mut store = MockSessionStore::new();
        store
            .expect_get()
            .returning(|_| Err(AppError::storage("disk on fire")));

        let gate = SessionGate::new(Arc::new(store));
        assert_eq!(gate.acquire().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_all_keys_and_invalidates_sessions() {
        let mut store = store_with(Some("tok-123456789"), Some("alice"));
        store
            .expect_remove_many()
            .withf(|keys| {
                keys.len() == 3
                    && SESSION_KEYS
                        .iter()
                        .all(|k| keys.iter().any(|key| key.as_str() == *k))
            })
            .times(1)
            .returning(|_| Ok(()));

        let gate = SessionGate::new(Arc::new(store));
        let SessionState::Authenticated(session) = gate.acquire().await else {
            panic!("expected a session");
        };

        gate.logout().await.unwrap();
        assert!(!gate.is_current(&session));
    }

    #[tokio::test]
    async fn test_logout_invalidates_even_when_store_fails() {
        let mut store = store_with(Some("tok-123456789"), None);
        store
            .expect_remove_many()
            .returning(|_| Err(AppError::storage("read-only filesystem")));

        let gate = SessionGate::new(Arc::new(store));
        let SessionState::Authenticated(session) = gate.acquire().await else {
            panic!("expected a session");
        };

        assert!(gate.logout().await.is_err());
        assert!(!gate.is_current(&session));
    }

    #[tokio::test]
    async fn test_establish_writes_token_label_and_flag() {
        let mut store = MockSessionStore::new();
        store
            .expect_set_many()
            .withf(|entries| {
                entries.contains(&(TOKEN_KEY.to_string(), "tok-abc".to_string()))
                    && entries.contains(&(IDENTITY_KEY.to_string(), "bob".to_string()))
                    && entries.contains(&(AUTH_FLAG_KEY.to_string(), "true".to_string()))
            })
            .times(1)
            .returning(|_| Ok(()));

        let gate = SessionGate::new(Arc::new(store));
        gate.establish(Credentials {
            token: " tok-abc ".to_string(),
            identity_label: "bob".to_string(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_establish_rejects_blank_token() {
        let mut store = MockSessionStore::new();
        store.expect_set_many().times(0);

        let gate = SessionGate::new(Arc::new(store));
        let result = gate
            .establish(Credentials {
                token: "  ".to_string(),
                identity_label: "bob".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
