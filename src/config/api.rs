//! Backend authority endpoint configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend authority, without a trailing path.
    pub base_url: String,

    /// Opt-in client-side request timeout in seconds. Absent or zero
    /// means no client-enforced deadline: requests run to completion or
    /// transport failure.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// The configured timeout, `None` when requests should run
    /// unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            Some(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        }
    }

    #[test]
    fn https_url_is_valid() {
        assert!(config("https://api.firm.example").validate().is_ok());
    }

    #[test]
    fn empty_url_is_missing() {
        assert!(matches!(
            config("  ").validate(),
            Err(ValidationError::MissingRequired("api.base_url"))
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(matches!(
            config("ftp://api.firm.example").validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn absent_or_zero_timeout_means_unbounded() {
        let mut cfg = config("https://api.firm.example");
        assert_eq!(cfg.timeout(), None);

        cfg.timeout_secs = Some(0);
        assert_eq!(cfg.timeout(), None);
        assert!(cfg.validate().is_ok());

        cfg.timeout_secs = Some(30);
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(30)));
    }
}
