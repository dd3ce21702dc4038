//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuthGateway` - the authority's auth/license endpoints
//! - `CalendarGateway` - the authority's calendar endpoints
//! - `CredentialStore` - durable client-side credential persistence
//! - `IdentityProvider` - "who is the current actor" for attribution
//!   and the "mine" scope

mod auth_gateway;
mod calendar_gateway;
mod credential_store;
mod gateway_error;
mod identity_provider;

pub use auth_gateway::{AuthGateway, LoginResponse};
pub use calendar_gateway::{CalendarGateway, EventQuery};
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use gateway_error::GatewayError;
pub use identity_provider::IdentityProvider;
