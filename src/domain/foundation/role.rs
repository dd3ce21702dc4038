//! User roles within a firm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a firm member, as issued by the authority.
///
/// Roles gate administrative UI surfaces (seat reclamation is admin-only);
/// fine-grained per-record ACLs are not modeled in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Lawyer,
    Assistant,
    Viewer,
}

impl UserRole {
    /// Whether this role may reclaim license seats from other users.
    pub fn can_manage_seats(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Lawyer => "lawyer",
            UserRole::Assistant => "assistant",
            UserRole::Viewer => "viewer",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_manages_seats() {
        assert!(UserRole::Admin.can_manage_seats());
        assert!(!UserRole::Lawyer.can_manage_seats());
        assert!(!UserRole::Assistant.can_manage_seats());
        assert!(!UserRole::Viewer.can_manage_seats());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Lawyer).unwrap(), "\"lawyer\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
