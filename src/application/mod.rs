//! Application services.
//!
//! The two stateful managers that mirror and constrain server state:
//! explicit injected instances constructed once at process start, never
//! module-level singletons, so tests get a fresh instance each.

mod calendar_service;
mod session_manager;

pub use calendar_service::CalendarService;
pub use session_manager::SessionManager;
