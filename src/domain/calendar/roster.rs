//! Company user roster for assignment and per-user filtering.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// A firm member as returned by the roster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUser {
    pub id: UserId,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
