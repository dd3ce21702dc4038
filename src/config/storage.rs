//! Credential persistence configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Where the credential file lives.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
}

fn default_credentials_path() -> String {
    ".lexboard/credentials.json".to_string()
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.credentials_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }
}
