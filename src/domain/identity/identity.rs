//! Authenticated identity value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, UserRole};

/// The authenticated user, as issued by the authority at login.
///
/// Immutable for the lifetime of the session. Role changes only take
/// effect on the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Authority-issued user identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Login email.
    pub email: String,

    /// Firm role.
    pub role: UserRole,
}
