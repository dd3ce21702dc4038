//! File-backed credential store.
//!
//! Persists the stored credential set as one JSON file so a session
//! survives process restarts. The parent directory is created on first
//! save; a missing file on load means "no stored session".

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::identity::StoredCredentials;
use crate::ports::{CredentialStore, CredentialStoreError};

#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save(&self, credentials: &StoredCredentials) -> Result<(), CredentialStoreError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(credentials)
            .map_err(|e| CredentialStoreError::Malformed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredCredentials>, CredentialStoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CredentialStoreError::Io(e.to_string())),
        };

        let credentials = serde_json::from_str(&json)
            .map_err(|e| CredentialStoreError::Malformed(e.to_string()))?;

        Ok(Some(credentials))
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{UserId, UserRole};
    use crate::domain::identity::{AccessToken, Identity, SessionToken};
    use tempfile::TempDir;

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            access_token: AccessToken::new("at-123"),
            session_token: SessionToken::new("st-456"),
            identity: Identity {
                id: UserId::new("user-1").unwrap(),
                name: "Ada Silva".to_string(),
                email: "ada@firm.example".to_string(),
                role: UserRole::Admin,
            },
        }
    }

    fn store_in(dir: &TempDir) -> FileCredentialStore {
        FileCredentialStore::new(dir.path().join("session").join("credentials.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&credentials()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded, credentials());
    }

    #[tokio::test]
    async fn load_of_empty_store_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_previous_credentials() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&credentials()).await.unwrap();
        let mut replacement = credentials();
        replacement.session_token = SessionToken::new("st-789");
        store.save(&replacement).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.session_token, SessionToken::new("st-789"));
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&credentials()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_reports_malformed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        tokio::fs::create_dir_all(dir.path().join("session"))
            .await
            .unwrap();
        tokio::fs::write(
            dir.path().join("session").join("credentials.json"),
            "not json",
        )
        .await
        .unwrap();

        assert!(matches!(
            store.load().await,
            Err(CredentialStoreError::Malformed(_))
        ));
    }
}
