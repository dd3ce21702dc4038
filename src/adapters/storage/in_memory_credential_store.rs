//! In-memory credential store, for ephemeral sessions and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::identity::StoredCredentials;
use crate::ports::{CredentialStore, CredentialStoreError};

#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    slot: RwLock<Option<StoredCredentials>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn save(&self, credentials: &StoredCredentials) -> Result<(), CredentialStoreError> {
        *self.slot.write().await = Some(credentials.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredCredentials>, CredentialStoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{UserId, UserRole};
    use crate::domain::identity::{AccessToken, Identity, SessionToken};

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            access_token: AccessToken::new("at-123"),
            session_token: SessionToken::new("st-456"),
            identity: Identity {
                id: UserId::new("user-1").unwrap(),
                name: "Ada Silva".to_string(),
                email: "ada@firm.example".to_string(),
                role: UserRole::Viewer,
            },
        }
    }

    #[tokio::test]
    async fn starts_empty_and_round_trips() {
        let store = InMemoryCredentialStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save(&credentials()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(credentials()));

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
