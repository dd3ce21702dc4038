//! Draft and patch shapes for event mutations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, ContractId, ProcessId, Timestamp, UserId};

use super::{EventPriority, EventType};

/// Payload for creating a new event.
///
/// `created_by` is the creation-time "assign to" override: when present
/// it may name any firm user; when absent the acting identity is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub priority: EventPriority,

    pub start_time: Timestamp,

    pub end_time: Timestamp,

    #[serde(default)]
    pub all_day: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<ContractId>,

    #[serde(default)]
    pub attendees: Vec<UserId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

/// Payload for updating an existing event.
///
/// `None` fields are left untouched. Completion fields are deliberately
/// absent: completion state is only reachable through the complete
/// operation, never through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<EventPriority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<ContractId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<UserId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }

    /// Shorthand for a title-only patch.
    pub fn retitle(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let json = serde_json::to_string(&EventPatch::default()).unwrap();
        assert_eq!(json, "{}");
        assert!(EventPatch::default().is_empty());
    }

    #[test]
    fn retitle_patch_carries_only_title() {
        let patch = EventPatch::retitle("Rescheduled hearing");
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"title":"Rescheduled hearing"}"#);
        assert!(!patch.is_empty());
    }
}
