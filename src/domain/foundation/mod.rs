//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Lexboard domain.

mod errors;
mod ids;
mod role;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, ContractId, EventId, ProcessId, UserId};
pub use role::UserRole;
pub use timestamp::Timestamp;
