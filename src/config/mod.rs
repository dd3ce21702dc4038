//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEXBOARD` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use lexboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Authority at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend authority endpoint.
    pub api: ApiConfig,

    /// Client-side credential persistence.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `LEXBOARD` prefix, `__` separating nested values:
    ///
    /// - `LEXBOARD__API__BASE_URL=https://api.firm.example`
    /// - `LEXBOARD__STORAGE__CREDENTIALS_PATH=/var/lib/lexboard/credentials.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when required variables are missing or
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEXBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section fails its semantic
    /// checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
