//! JSON-file session store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::repositories::SessionStore;
use crate::error::AppError;

/// Session store persisted as a flat JSON object of strings.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// original, so a batch is either fully applied or not at all. A missing file
/// reads as an empty store.
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            AppError::storage(format!("Corrupt session file {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::storage(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::storage(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        restrict_permissions(&tmp).await?;

        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| AppError::storage(format!("Failed to set permissions on {}: {}", path.display(), e)))
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut current = self.load().await?;
        current.extend(entries);
        self.save(&current).await
    }

    async fn remove_many(&self, keys: Vec<String>) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let (mut current, recovered) = match self.load().await {
            Ok(current) => (current, false),
            Err(e) => {
                // An unreadable file must not keep holding a session.
                tracing::warn!(error = %e, "Replacing unreadable session file");
                (BTreeMap::new(), true)
            }
        };

        let before = current.len();
        current.retain(|key, _| !keys.contains(key));
        if current.len() == before && !recovered {
            return Ok(());
        }

        self.save(&current).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.get("token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/dir/session.json"));

        store
            .set_many(vec![
                ("token".to_string(), "abc".to_string()),
                ("user_name".to_string(), "alice".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(store.get("token").await.unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get("user_name").await.unwrap().as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_remove_many_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store
            .set_many(vec![
                ("token".to_string(), "abc".to_string()),
                ("theme".to_string(), "dark".to_string()),
            ])
            .await
            .unwrap();
        store.remove_many(vec!["token".to_string()]).await.unwrap();

        assert_eq!(store.get("token").await.unwrap(), None);
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_storage_error_and_remove_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileSessionStore::new(&path);

        assert!(matches!(store.get("token").await, Err(AppError::Storage(_))));

        store.remove_many(vec!["token".to_string()]).await.unwrap();
        assert_eq!(store.get("token").await.unwrap(), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);
        store
            .set_many(vec![("token".to_string(), "abc".to_string())])
            .await
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
