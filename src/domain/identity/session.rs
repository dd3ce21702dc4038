//! Active session entries as rendered in the license pool snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Minimal user summary attached to an active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// One active login, occupying exactly one seat of the license pool.
///
/// Created by the authority on login and destroyed on logout, forced
/// admin logout, or inactivity expiry. The client only renders these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    /// Authority-assigned session identifier.
    pub id: String,

    /// The user holding the seat.
    pub user: SessionUser,

    /// Last observed activity for this session.
    pub last_activity: Timestamp,

    /// Source address, when the authority reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}
