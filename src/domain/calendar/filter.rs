//! Client-side filter predicate and the server-side user scope.

use crate::domain::foundation::{ClientId, ContractId, ProcessId, UserId};

use super::{CalendarEvent, EventPriority, EventType};

/// The server-side axis narrowing event queries to "mine", "a specific
/// user's", or "everyone's" events.
///
/// The original UI held this as two fields (`selected_user_id`,
/// `my_events_only`) with a setter-enforced mutual exclusion; modeled as
/// a sum type the illegal combination cannot be represented at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserScope {
    /// Organization-wide, unscoped.
    #[default]
    Everyone,
    /// Events attributed to one specific user.
    User(UserId),
    /// Events attributed to the acting identity.
    Mine,
}

impl UserScope {
    /// The selected user, when the scope names one explicitly.
    pub fn selected_user_id(&self) -> Option<&UserId> {
        match self {
            UserScope::User(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the scope is "mine only".
    pub fn my_events_only(&self) -> bool {
        matches!(self, UserScope::Mine)
    }
}

/// The fine, instant client-side filter pass.
///
/// All axes combine conjunctively; an unset axis is always-true. Type,
/// priority, and search are also applied server-side, but reapplying
/// them locally gives instant feedback without a round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub event_type: Option<EventType>,

    pub priority: Option<EventPriority>,

    pub client_id: Option<ClientId>,

    pub process_id: Option<ProcessId>,

    pub contract_id: Option<ContractId>,

    /// Case-insensitive substring matched against title OR description.
    pub search: String,
}

impl EventFilter {
    /// Whether no axis is set.
    pub fn is_empty(&self) -> bool {
        self == &EventFilter::default()
    }

    /// Applies the combined predicate to one event.
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = event.title.to_lowercase().contains(&needle);
            let in_description = event
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_title && !in_description {
                return false;
            }
        }
        if let Some(event_type) = self.event_type {
            if event.event_type != event_type {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if event.priority != priority {
                return false;
            }
        }
        if let Some(client_id) = self.client_id {
            if event.client_id != Some(client_id) {
                return false;
            }
        }
        if let Some(process_id) = self.process_id {
            if event.process_id != Some(process_id) {
                return false;
            }
        }
        if let Some(contract_id) = self.contract_id {
            if event.contract_id != Some(contract_id) {
                return false;
            }
        }
        true
    }

    /// Applies the predicate over a collection, preserving order.
    pub fn apply<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, Timestamp, UserRole};
    use crate::domain::calendar::EventDraft;
    use crate::domain::identity::Identity;
    use chrono::{TimeZone, Utc};

    fn creator() -> Identity {
        Identity {
            id: UserId::new("user-1").unwrap(),
            name: "Ada Silva".to_string(),
            email: "ada@firm.example".to_string(),
            role: UserRole::Lawyer,
        }
    }

    fn event(title: &str, event_type: EventType) -> CalendarEvent {
        let draft = EventDraft {
            title: title.to_string(),
            description: None,
            event_type,
            priority: EventPriority::Medium,
            start_time: Timestamp::from_datetime(
                Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            ),
            end_time: Timestamp::from_datetime(
                Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            ),
            all_day: false,
            location: None,
            client_id: None,
            process_id: None,
            contract_id: None,
            attendees: vec![],
            color: None,
            created_by: None,
        };
        CalendarEvent::from_draft(EventId::new(), draft, creator(), Timestamp::now()).unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = EventFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&event("Anything", EventType::Other)));
    }

    #[test]
    fn search_is_case_insensitive_over_title() {
        let filter = EventFilter {
            search: "FILING".to_string(),
            ..EventFilter::default()
        };
        assert!(filter.matches(&event("Filing deadline", EventType::Deadline)));
        assert!(!filter.matches(&event("Court hearing", EventType::CourtHearing)));
    }

    #[test]
    fn search_also_matches_description() {
        let mut ev = event("Weekly sync", EventType::Meeting);
        ev.description = Some("Discuss the Silva filing".to_string());
        let filter = EventFilter {
            search: "filing".to_string(),
            ..EventFilter::default()
        };
        assert!(filter.matches(&ev));
    }

    #[test]
    fn axes_combine_conjunctively() {
        // One deadline titled "Filing deadline", one meeting titled
        // "Filing review": type + search together keep only the deadline.
        let deadline = event("Filing deadline", EventType::Deadline);
        let meeting = event("Filing review", EventType::Meeting);
        let filter = EventFilter {
            event_type: Some(EventType::Deadline),
            search: "filing".to_string(),
            ..EventFilter::default()
        };
        let events = vec![deadline.clone(), meeting];
        let kept = filter.apply(&events);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, deadline.id);
    }

    #[test]
    fn record_link_filter_requires_equality() {
        let mut linked = event("Signing", EventType::Appointment);
        let client = ClientId::new();
        linked.client_id = Some(client);
        let unlinked = event("Signing", EventType::Appointment);

        let filter = EventFilter {
            client_id: Some(client),
            ..EventFilter::default()
        };
        assert!(filter.matches(&linked));
        assert!(!filter.matches(&unlinked));
    }

    #[test]
    fn scope_views_report_exclusively() {
        let everyone = UserScope::Everyone;
        assert!(everyone.selected_user_id().is_none());
        assert!(!everyone.my_events_only());

        let user = UserScope::User(UserId::new("user-2").unwrap());
        assert!(user.selected_user_id().is_some());
        assert!(!user.my_events_only());

        let mine = UserScope::Mine;
        assert!(mine.selected_user_id().is_none());
        assert!(mine.my_events_only());
    }
}
