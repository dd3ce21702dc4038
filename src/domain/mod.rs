//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `identity` - Authenticated identity, active sessions, and the license pool
//! - `calendar` - The firm's shared event set, filtering, and schedule math

pub mod calendar;
pub mod foundation;
pub mod identity;
