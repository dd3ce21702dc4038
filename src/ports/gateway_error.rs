//! Shared error type for authority-facing gateways.

use thiserror::Error;

/// Failure talking to the authority.
///
/// The distinction matters for display: `Rejected` carries the
/// authority's human-readable `message` field verbatim and is what the
/// UI shows; the other variants are transport noise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The authority processed the request and said no.
    #[error("{message}")]
    Rejected { message: String },

    /// The request never completed (DNS, connect, timeout at the OS level).
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Creates a rejection carrying the authority's message.
    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_bare_message() {
        let err = GatewayError::rejected("Invalid credentials");
        assert_eq!(format!("{}", err), "Invalid credentials");
    }
}
