//! Calendar-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::GatewayError;

/// Errors surfaced by the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The event is not in the in-memory collection.
    NotFound(EventId),
    /// A "mine" scope or creation attribution needed an acting identity
    /// and none is authenticated.
    NotAuthenticated,
    /// The authority rejected the request; carries its message verbatim.
    Rejected(String),
    /// Transport-level failure reaching the authority.
    Network(String),
    /// Validation failed locally, before any network call.
    ValidationFailed { field: String, message: String },
    /// Invalid lifecycle transition (e.g. completing twice).
    InvalidState(String),
}

impl CalendarError {
    pub fn not_found(id: EventId) -> Self {
        CalendarError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CalendarError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CalendarError::NotFound(_) => ErrorCode::EventNotFound,
            CalendarError::NotAuthenticated => ErrorCode::NotAuthenticated,
            CalendarError::Rejected(_) => ErrorCode::GatewayError,
            CalendarError::Network(_) => ErrorCode::GatewayError,
            CalendarError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CalendarError::InvalidState(_) => ErrorCode::InvalidStateTransition,
        }
    }

    /// The message recorded on the store's `error` field and shown to
    /// the user. Authority rejections pass through verbatim.
    pub fn message(&self) -> String {
        match self {
            CalendarError::NotFound(id) => format!("Event not found: {}", id),
            CalendarError::NotAuthenticated => "Not authenticated".to_string(),
            CalendarError::Rejected(message) => message.clone(),
            CalendarError::Network(message) => format!("Network error: {}", message),
            CalendarError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CalendarError::InvalidState(message) => format!("Invalid state: {}", message),
        }
    }
}

impl std::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CalendarError {}

impl From<GatewayError> for CalendarError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message } => CalendarError::Rejected(message),
            GatewayError::Network(message) => CalendarError::Network(message),
            GatewayError::InvalidResponse(message) => CalendarError::Network(message),
        }
    }
}

impl From<DomainError> for CalendarError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => CalendarError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::EventAlreadyCompleted | ErrorCode::InvalidStateTransition => {
                CalendarError::InvalidState(err.message)
            }
            _ => CalendarError::Network(err.message),
        }
    }
}
