//! CalendarService - the calendar aggregation and filtering engine.
//!
//! Holds the server-filtered event collection and the navigation state,
//! and keeps both synchronized with the authority: every scope change
//! refetches immediately, so scope and content never diverge.
//!
//! # Concurrency
//!
//! Overlapping fetches are not cancelled; instead every dispatch takes a
//! monotonically increasing sequence number and a response is discarded
//! when a newer fetch has been dispatched meanwhile, so stale data never
//! overwrites fresher data. Loading is a reference-counted in-flight
//! counter rather than a shared boolean, so it stays true until the last
//! outstanding operation completes.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;

use crate::domain::calendar::{
    events_on_day, month_cells, upcoming_agenda, CalendarError, CalendarEvent, CompanyUser,
    EventDraft, EventFilter, EventPatch, MonthCell, UserScope, ViewMode,
};
use crate::domain::foundation::{EventId, Timestamp, UserId};
use crate::ports::{CalendarGateway, EventQuery, IdentityProvider};

#[derive(Debug, Clone)]
struct CalendarState {
    events: Vec<CalendarEvent>,
    current_date: NaiveDate,
    view_mode: ViewMode,
    users: Vec<CompanyUser>,
    scope: UserScope,
    selected_event: Option<EventId>,
    last_error: Option<String>,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            current_date: Local::now().date_naive(),
            view_mode: ViewMode::default(),
            users: Vec::new(),
            scope: UserScope::default(),
            selected_event: None,
            last_error: None,
        }
    }
}

/// Decrements the in-flight counter when the operation ends, on any path.
struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn begin(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The calendar engine.
///
/// Owns the event collection; nothing mutates it except the operations
/// here. Mutations are confirmed-then-applied: the local collection only
/// changes after the authority accepts, never optimistically.
pub struct CalendarService {
    gateway: Arc<dyn CalendarGateway>,
    identity: Arc<dyn IdentityProvider>,
    state: RwLock<CalendarState>,
    fetch_seq: AtomicU64,
    in_flight: Arc<AtomicUsize>,
}

impl CalendarService {
    pub fn new(gateway: Arc<dyn CalendarGateway>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            gateway,
            identity,
            state: RwLock::new(CalendarState::default()),
            fetch_seq: AtomicU64::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// The in-memory event collection (already server-scoped).
    pub async fn events(&self) -> Vec<CalendarEvent> {
        self.state.read().await.events.clone()
    }

    /// Events whose start falls on the given local calendar day.
    pub async fn events_for_date(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        let state = self.state.read().await;
        events_on_day(&state.events, date)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The collection narrowed by the instant client-side pass.
    pub async fn filtered_events(&self, filter: &EventFilter) -> Vec<CalendarEvent> {
        let state = self.state.read().await;
        filter.apply(&state.events).into_iter().cloned().collect()
    }

    /// The month grid for the given month, events bucketed and capped.
    pub async fn month_view(&self, year: i32, month: u32) -> Result<Vec<MonthCell>, CalendarError> {
        let state = self.state.read().await;
        Ok(month_cells(&state.events, year, month)?)
    }

    /// The bounded upcoming feed.
    pub async fn agenda(&self, now: Timestamp) -> Vec<CalendarEvent> {
        let state = self.state.read().await;
        upcoming_agenda(&state.events, now)
    }

    /// Whether any operation is still in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn current_date(&self) -> NaiveDate {
        self.state.read().await.current_date
    }

    pub async fn view_mode(&self) -> ViewMode {
        self.state.read().await.view_mode
    }

    pub async fn users(&self) -> Vec<CompanyUser> {
        self.state.read().await.users.clone()
    }

    /// The explicitly selected user of the scope filter, if any.
    pub async fn selected_user_id(&self) -> Option<UserId> {
        self.state.read().await.scope.selected_user_id().cloned()
    }

    /// Whether the scope is "mine only".
    pub async fn my_events_only(&self) -> bool {
        self.state.read().await.scope.my_events_only()
    }

    pub async fn selected_event(&self) -> Option<CalendarEvent> {
        let state = self.state.read().await;
        let id = state.selected_event?;
        state.events.iter().find(|e| e.id == id).cloned()
    }

    /// The message from the last failed operation.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation (no network)
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn set_current_date(&self, date: NaiveDate) {
        self.state.write().await.current_date = date;
    }

    pub async fn set_view_mode(&self, mode: ViewMode) {
        self.state.write().await.view_mode = mode;
    }

    pub async fn select_event(&self, id: Option<EventId>) {
        self.state.write().await.selected_event = id;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope setters (mutually exclusive, refetch immediately)
    // ─────────────────────────────────────────────────────────────────────────

    /// Scopes the query to one user's events, or back to everyone's.
    ///
    /// Activating a specific user clears "mine only"; the refetch keeps
    /// displayed data synchronized with the new scope.
    pub async fn set_selected_user(&self, user_id: Option<UserId>) -> Result<(), CalendarError> {
        {
            let mut state = self.state.write().await;
            state.scope = match user_id {
                Some(id) => UserScope::User(id),
                None => UserScope::Everyone,
            };
        }
        self.fetch_events(EventFilter::default()).await
    }

    /// Scopes the query to the acting identity's events, or back to
    /// everyone's. Activating it clears any selected user.
    pub async fn set_my_events_only(&self, mine: bool) -> Result<(), CalendarError> {
        {
            let mut state = self.state.write().await;
            state.scope = if mine { UserScope::Mine } else { UserScope::Everyone };
        }
        self.fetch_events(EventFilter::default()).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Network operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-queries the authority and replaces the in-memory collection.
    ///
    /// Idempotent and always safe to re-issue. The query combines the
    /// ad-hoc filter passed in with the user scope held in state.
    ///
    /// # Errors
    ///
    /// - `NotAuthenticated` for a "mine" scope with no acting identity
    /// - `Rejected`/`Network` from the authority
    pub async fn fetch_events(&self, extra: EventFilter) -> Result<(), CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let scope = self.state.read().await.scope.clone();
        let query = match self.build_query(extra, scope).await {
            Ok(query) => query,
            Err(err) => {
                self.record_error(&err).await;
                return Err(err);
            }
        };

        match self.gateway.list_events(&query).await {
            Ok(events) => {
                if self.fetch_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(seq, "Discarding stale event fetch response");
                    return Ok(());
                }
                let mut state = self.state.write().await;
                state.events = events;
                state.last_error = None;
                Ok(())
            }
            Err(err) => {
                let err = CalendarError::from(err);
                if self.fetch_seq.load(Ordering::SeqCst) == seq {
                    self.record_error(&err).await;
                }
                Err(err)
            }
        }
    }

    /// Loads the company roster.
    pub async fn fetch_users(&self) -> Result<(), CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);
        match self.gateway.list_users().await {
            Ok(users) => {
                self.state.write().await.users = users;
                Ok(())
            }
            Err(err) => {
                let err = CalendarError::from(err);
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Creates an event and appends it to the collection once the
    /// authority confirms.
    ///
    /// When the draft carries no `created_by` override, the event is
    /// attributed to the acting identity.
    pub async fn add_event(&self, mut draft: EventDraft) -> Result<CalendarEvent, CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);

        if let Err(e) = CalendarEvent::validate_title(&draft.title) {
            let err = CalendarError::from(e);
            self.record_error(&err).await;
            return Err(err);
        }
        if draft.end_time.is_before(&draft.start_time) {
            let err = CalendarError::validation("end_time", "Event cannot end before it starts");
            self.record_error(&err).await;
            return Err(err);
        }
        if draft.created_by.is_none() {
            let identity = match self.identity.current_identity().await {
                Some(identity) => identity,
                None => {
                    let err = CalendarError::NotAuthenticated;
                    self.record_error(&err).await;
                    return Err(err);
                }
            };
            draft.created_by = Some(identity.id);
        }

        match self.gateway.create_event(&draft).await {
            Ok(event) => {
                let mut state = self.state.write().await;
                state.events.push(event.clone());
                state.last_error = None;
                Ok(event)
            }
            Err(err) => {
                let err = CalendarError::from(err);
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Updates an event, replacing the local copy with the authority's
    /// post-update view. Editing a completed event is allowed; the patch
    /// shape cannot carry completion fields.
    pub async fn update_event(
        &self,
        id: &EventId,
        patch: &EventPatch,
    ) -> Result<CalendarEvent, CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);

        if let Some(title) = &patch.title {
            if let Err(e) = CalendarEvent::validate_title(title) {
                let err = CalendarError::from(e);
                self.record_error(&err).await;
                return Err(err);
            }
        }

        self.ensure_known(id).await?;
        match self.gateway.update_event(id, patch).await {
            Ok(updated) => {
                let mut state = self.state.write().await;
                if let Some(slot) = state.events.iter_mut().find(|e| e.id == *id) {
                    *slot = updated.clone();
                }
                state.last_error = None;
                Ok(updated)
            }
            Err(err) => {
                let err = CalendarError::from(err);
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Deletes an event and drops it from the collection, clearing the
    /// selection pointer if it matched.
    pub async fn delete_event(&self, id: &EventId) -> Result<(), CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);

        self.ensure_known(id).await?;
        match self.gateway.delete_event(id).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                state.events.retain(|e| e.id != *id);
                if state.selected_event == Some(*id) {
                    state.selected_event = None;
                }
                state.last_error = None;
                Ok(())
            }
            Err(err) => {
                let err = CalendarError::from(err);
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    /// Completes an event. Terminal: there is no uncomplete operation.
    pub async fn complete_event(&self, id: &EventId) -> Result<(), CalendarError> {
        let _guard = InFlightGuard::begin(&self.in_flight);

        self.ensure_known(id).await?;
        match self.gateway.complete_event(id).await {
            Ok(completed_at) => {
                let mut state = self.state.write().await;
                if let Some(event) = state.events.iter_mut().find(|e| e.id == *id) {
                    if !event.is_completed() {
                        event.mark_completed(completed_at)?;
                    }
                }
                state.last_error = None;
                Ok(())
            }
            Err(err) => {
                let err = CalendarError::from(err);
                self.record_error(&err).await;
                Err(err)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Mutations address events by id; an id absent from the collection
    /// fails locally without asking the authority.
    async fn ensure_known(&self, id: &EventId) -> Result<(), CalendarError> {
        let known = self.state.read().await.events.iter().any(|e| e.id == *id);
        if known {
            return Ok(());
        }
        let err = CalendarError::not_found(*id);
        self.record_error(&err).await;
        Err(err)
    }

    async fn build_query(
        &self,
        filter: EventFilter,
        scope: UserScope,
    ) -> Result<EventQuery, CalendarError> {
        let (user_id, my_events_only) = match scope {
            UserScope::Everyone => (None, false),
            UserScope::User(id) => (Some(id), false),
            UserScope::Mine => {
                // The authority resolves "me" from the session credential,
                // but a mine-scope without a session would silently widen
                // to everyone; fail instead.
                if self.identity.current_identity().await.is_none() {
                    return Err(CalendarError::NotAuthenticated);
                }
                (None, true)
            }
        };
        Ok(EventQuery {
            filter,
            user_id,
            my_events_only,
        })
    }

    async fn record_error(&self, err: &CalendarError) {
        self.state.write().await.last_error = Some(err.message());
    }
}
