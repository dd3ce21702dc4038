//! Credential store port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::identity::StoredCredentials;

/// Errors from the durable credential store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialStoreError {
    #[error("Credential storage I/O failed: {0}")]
    Io(String),

    /// Stored state exists but cannot be decoded. `check_auth` reacts by
    /// clearing the store and falling back to unauthenticated.
    #[error("Stored credentials are malformed: {0}")]
    Malformed(String),
}

/// Port for the durable client-side credential state.
///
/// Holds exactly one credential set; `save` overwrites, `load` of an
/// empty store is `Ok(None)`, and `clear` is idempotent.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn save(&self, credentials: &StoredCredentials) -> Result<(), CredentialStoreError>;

    async fn load(&self) -> Result<Option<StoredCredentials>, CredentialStoreError>;

    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
