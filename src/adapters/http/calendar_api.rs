//! REST implementation of the calendar gateway.
//!
//! The event surface is camelCase end to end; query scoping travels as
//! query-string parameters so the authority filters before anything
//! reaches the wire back.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::{CalendarEvent, CompanyUser, EventDraft, EventPatch};
use crate::domain::foundation::{EventId, Timestamp};
use crate::ports::{CalendarGateway, EventQuery, GatewayError};

use super::client::ApiClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionBody {
    completed_at: Timestamp,
}

pub struct HttpCalendarGateway {
    client: Arc<ApiClient>,
}

impl HttpCalendarGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

/// Flattens an `EventQuery` into query-string pairs. Unset axes are
/// omitted entirely rather than sent empty.
fn query_params(query: &EventQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(event_type) = query.filter.event_type {
        params.push(("type", wire_variant(&event_type)));
    }
    if let Some(priority) = query.filter.priority {
        params.push(("priority", wire_variant(&priority)));
    }
    if let Some(client_id) = query.filter.client_id {
        params.push(("clientId", client_id.to_string()));
    }
    if let Some(process_id) = query.filter.process_id {
        params.push(("processId", process_id.to_string()));
    }
    if let Some(contract_id) = query.filter.contract_id {
        params.push(("contractId", contract_id.to_string()));
    }
    if !query.filter.search.is_empty() {
        params.push(("search", query.filter.search.clone()));
    }
    if let Some(user_id) = &query.user_id {
        params.push(("userId", user_id.to_string()));
    }
    if query.my_events_only {
        params.push(("myEventsOnly", "true".to_string()));
    }

    params
}

/// The serde wire name of a unit enum variant.
fn wire_variant<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

#[async_trait]
impl CalendarGateway for HttpCalendarGateway {
    async fn list_events(&self, query: &EventQuery) -> Result<Vec<CalendarEvent>, GatewayError> {
        let request = self
            .client
            .get("/calendar/events")
            .query(&query_params(query));
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        let events: Vec<CalendarEvent> = self.client.json(response).await?;
        tracing::debug!(count = events.len(), "Fetched calendar events");
        Ok(events)
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, GatewayError> {
        let request = self.client.post("/calendar/events").json(draft);
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        self.client.json(response).await
    }

    async fn update_event(
        &self,
        id: &EventId,
        patch: &EventPatch,
    ) -> Result<CalendarEvent, GatewayError> {
        let path = format!("/calendar/events/{}", id);
        let request = self.client.put(&path).json(patch);
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        self.client.json(response).await
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError> {
        let path = format!("/calendar/events/{}", id);
        let request = self.client.delete(&path);
        let response = self.client.send(request).await?;
        self.client.check_status(response).await?;
        Ok(())
    }

    async fn complete_event(&self, id: &EventId) -> Result<Timestamp, GatewayError> {
        let path = format!("/calendar/events/{}/complete", id);
        let request = self.client.patch(&path);
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        let body: CompletionBody = self.client.json(response).await?;
        Ok(body.completed_at)
    }

    async fn list_users(&self) -> Result<Vec<CompanyUser>, GatewayError> {
        let request = self.client.get("/calendar/users");
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        self.client.json(response).await
    }
}

impl std::fmt::Debug for HttpCalendarGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCalendarGateway").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::{EventFilter, EventPriority, EventType};
    use crate::domain::foundation::{ClientId, UserId};

    #[test]
    fn unscoped_query_sends_no_params() {
        assert!(query_params(&EventQuery::unscoped()).is_empty());
    }

    #[test]
    fn filter_axes_use_wire_names() {
        let query = EventQuery {
            filter: EventFilter {
                event_type: Some(EventType::CourtHearing),
                priority: Some(EventPriority::High),
                client_id: Some(ClientId::new()),
                search: "filing".to_string(),
                ..EventFilter::default()
            },
            user_id: Some(UserId::new("user-7").unwrap()),
            my_events_only: false,
        };

        let params = query_params(&query);
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["type", "priority", "clientId", "search", "userId"]);
        assert_eq!(params[0].1, "court_hearing");
        assert_eq!(params[1].1, "high");
        assert_eq!(params[3].1, "filing");
        assert_eq!(params[4].1, "user-7");
    }

    #[test]
    fn mine_scope_sends_only_the_flag() {
        let query = EventQuery {
            filter: EventFilter::default(),
            user_id: None,
            my_events_only: true,
        };
        assert_eq!(
            query_params(&query),
            vec![("myEventsOnly", "true".to_string())]
        );
    }

    #[test]
    fn completion_body_decodes_camel_case() {
        let body: CompletionBody =
            serde_json::from_str(r#"{"completedAt":"2024-03-01T12:00:00Z"}"#).unwrap();
        assert_eq!(body.completed_at.to_string(), "2024-03-01T12:00:00+00:00");
    }
}
