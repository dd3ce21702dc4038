//! Identity-specific error types.

use crate::domain::foundation::ErrorCode;
use crate::ports::GatewayError;

/// Errors surfaced by the session/license manager.
///
/// Only user-initiated mutations produce these; advisory refreshes
/// (license-info fetches) are logged and never surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authority rejected the request; carries its message verbatim
    /// (e.g. invalid credentials, seat limit reached).
    Rejected(String),
    /// An operation required an authenticated session and none exists.
    NotAuthenticated,
    /// The acting role may not perform the operation; checked locally
    /// before the authority is asked.
    Forbidden(String),
    /// Transport-level failure reaching the authority.
    Network(String),
    /// The credential store failed in a way that is not "no credentials".
    Storage(String),
}

impl AuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::Rejected(_) => ErrorCode::Unauthorized,
            AuthError::NotAuthenticated => ErrorCode::NotAuthenticated,
            AuthError::Forbidden(_) => ErrorCode::Forbidden,
            AuthError::Network(_) => ErrorCode::GatewayError,
            AuthError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// The message shown to the user. Authority rejections pass through
    /// untouched so the UI displays exactly what the backend said.
    pub fn message(&self) -> String {
        match self {
            AuthError::Rejected(message) => message.clone(),
            AuthError::NotAuthenticated => "Not authenticated".to_string(),
            AuthError::Forbidden(message) => message.clone(),
            AuthError::Network(message) => format!("Network error: {}", message),
            AuthError::Storage(message) => format!("Storage error: {}", message),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl From<GatewayError> for AuthError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message } => AuthError::Rejected(message),
            GatewayError::Network(message) => AuthError::Network(message),
            GatewayError::InvalidResponse(message) => AuthError::Network(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_passes_through_verbatim() {
        let err = AuthError::from(GatewayError::rejected("License limit reached"));
        assert_eq!(err.message(), "License limit reached");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
