//! HTTP adapters for the backend REST authority.

mod auth_api;
mod calendar_api;
mod client;

pub use auth_api::HttpAuthGateway;
pub use calendar_api::HttpCalendarGateway;
pub use client::ApiClient;
