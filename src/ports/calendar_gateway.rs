//! Calendar gateway port.
//!
//! Contract for the authority's calendar endpoints: the coarse,
//! server-side filter pass plus the event mutations.

use async_trait::async_trait;

use crate::domain::calendar::{CalendarEvent, CompanyUser, EventDraft, EventFilter, EventPatch};
use crate::domain::foundation::{EventId, Timestamp, UserId};

use super::GatewayError;

/// Server-side query: the ad-hoc filter axes plus the resolved user
/// scope. `my_events_only` and `user_id` are mutually exclusive here by
/// the time a query is built; the service resolves `Mine` to the acting
/// identity before constructing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub filter: EventFilter,
    pub user_id: Option<UserId>,
    pub my_events_only: bool,
}

impl EventQuery {
    /// An unscoped, unfiltered query (the organization-wide fetch).
    pub fn unscoped() -> Self {
        Self::default()
    }
}

/// Port for the authority's calendar surface.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Fetches the server-filtered event collection.
    async fn list_events(&self, query: &EventQuery) -> Result<Vec<CalendarEvent>, GatewayError>;

    /// Creates an event; the authority assigns the ID and timestamps.
    async fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, GatewayError>;

    /// Updates an event; returns the authority's post-update view.
    async fn update_event(
        &self,
        id: &EventId,
        patch: &EventPatch,
    ) -> Result<CalendarEvent, GatewayError>;

    /// Deletes an event.
    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError>;

    /// Completes an event; returns the authority's completion instant.
    async fn complete_event(&self, id: &EventId) -> Result<Timestamp, GatewayError>;

    /// Fetches the company roster for assignment and filtering.
    async fn list_users(&self) -> Result<Vec<CompanyUser>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn CalendarGateway) {}
    }

    #[test]
    fn unscoped_query_has_no_user_axis() {
        let query = EventQuery::unscoped();
        assert!(query.user_id.is_none());
        assert!(!query.my_events_only);
        assert!(query.filter.is_empty());
    }
}
