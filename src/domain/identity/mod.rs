//! Identity module - authenticated identity, sessions, and the license pool.
//!
//! The client never owns seat accounting: the pool snapshot is authority
//! truth, re-fetched after every action that could change it. This module
//! only models and renders that truth.

mod credentials;
mod errors;
mod identity;
mod license;
mod session;

pub use credentials::{AccessToken, SessionToken, StoredCredentials};
pub use errors::AuthError;
pub use identity::Identity;
pub use license::LicensePool;
pub use session::{ActiveSession, SessionUser};
