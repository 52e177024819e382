//! In-process session store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::repositories::SessionStore;
use crate::error::AppError;

/// A session store that lives only as long as the process.
///
/// Useful for tests and for embedding the core where persistence is handled
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), AppError> {
        self.entries.lock().await.extend(entries);
        Ok(())
    }

    async fn remove_many(&self, keys: Vec<String>) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        for key in &keys {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_batch_remove() {
        let store = MemorySessionStore::with_entries([("token", "abc"), ("user_name", "alice")]);
        assert_eq!(store.get("token").await.unwrap().as_deref(), Some("abc"));

        store
            .remove_many(vec!["token".to_string(), "user_name".to_string()])
            .await
            .unwrap();
        assert!(store.is_empty().await);
    }
}
