//! Calendar module - the organization's shared event set.
//!
//! Events live in one firm-wide collection; any authorized actor may edit
//! or delete any event. Completion is a one-way transition. Filtering is
//! two-layered by design: a coarse server pass (user scope, record links)
//! and a fine client pass (type, priority, free text) for instant feedback.

mod draft;
mod errors;
mod event;
mod filter;
mod roster;
mod schedule;
mod view_mode;

pub use draft::{EventDraft, EventPatch};
pub use errors::CalendarError;
pub use event::{CalendarEvent, EventPriority, EventType};
pub use filter::{EventFilter, UserScope};
pub use roster::CompanyUser;
pub use schedule::{
    events_on_day, month_cells, month_grid, upcoming_agenda, MonthCell, AGENDA_LIMIT,
    DAY_DISPLAY_CAP,
};
pub use view_mode::ViewMode;
