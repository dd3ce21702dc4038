//! Calendar event aggregate.
//!
//! Lifecycle: created (active) -> optionally completed (one-way, sets
//! `completed_at`) -> deleted. `created_by` is fixed at creation but may
//! name any firm user, not just the acting one (an "assign to" override).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, ContractId, DomainError, ErrorCode, EventId, ProcessId, Timestamp, UserId,
};
use crate::domain::identity::Identity;

use super::EventDraft;

/// Maximum length for event titles.
pub const MAX_TITLE_LENGTH: usize = 300;

/// Kind of scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Deadline,
    Meeting,
    CourtHearing,
    Reminder,
    Appointment,
    Other,
}

impl EventType {
    /// Default display color for events of this type, used when a draft
    /// does not carry an explicit color.
    pub fn default_color(&self) -> &'static str {
        match self {
            EventType::Deadline => "#dc2626",
            EventType::Meeting => "#2563eb",
            EventType::CourtHearing => "#7c3aed",
            EventType::Reminder => "#f59e0b",
            EventType::Appointment => "#059669",
            EventType::Other => "#6b7280",
        }
    }
}

/// Urgency of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A scheduled event in the firm's shared calendar.
///
/// # Invariants
///
/// - `end_time` is never before `start_time`
/// - completion is one-way: once `is_completed`, no operation resets it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Authority-assigned identifier.
    pub id: EventId,

    /// Short title shown in every view.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub priority: EventPriority,

    pub start_time: Timestamp,

    pub end_time: Timestamp,

    pub all_day: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Linked client record, by reference only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,

    /// Linked legal process, by reference only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,

    /// Linked contract, by reference only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<ContractId>,

    #[serde(default)]
    pub attendees: Vec<UserId>,

    /// Display color (hex).
    pub color: String,

    /// Fixed at creation; may name any firm user.
    pub created_by: Identity,

    is_completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<Timestamp>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl CalendarEvent {
    /// Materializes a draft into an active event.
    ///
    /// Used by gateways that assign IDs locally (in-memory, tests); the
    /// REST gateway receives fully formed events from the authority.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty/too long or the end
    ///   precedes the start
    pub fn from_draft(
        id: EventId,
        draft: EventDraft,
        created_by: Identity,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&draft.title)?;
        if draft.end_time.is_before(&draft.start_time) {
            return Err(DomainError::validation(
                "end_time",
                "Event cannot end before it starts",
            ));
        }

        let color = draft
            .color
            .unwrap_or_else(|| draft.event_type.default_color().to_string());

        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            event_type: draft.event_type,
            priority: draft.priority,
            start_time: draft.start_time,
            end_time: draft.end_time,
            all_day: draft.all_day,
            location: draft.location,
            client_id: draft.client_id,
            process_id: draft.process_id,
            contract_id: draft.contract_id,
            attendees: draft.attendees,
            color,
            created_by,
            is_completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Whether the event has been completed.
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// When the event was completed, if it has been.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// Marks the event completed. Terminal: there is no uncomplete.
    ///
    /// # Errors
    ///
    /// - `EventAlreadyCompleted` if called twice
    pub fn mark_completed(&mut self, at: Timestamp) -> Result<(), DomainError> {
        if self.is_completed {
            return Err(DomainError::new(
                ErrorCode::EventAlreadyCompleted,
                "Event is already completed",
            ));
        }
        self.is_completed = true;
        self.completed_at = Some(at);
        self.updated_at = at;
        Ok(())
    }

    /// Validates an event title.
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }
}
