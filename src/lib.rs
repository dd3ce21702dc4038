//! Lexboard - legal practice dashboard core
//!
//! This crate implements the session and license-seat accounting manager
//! and the calendar aggregation engine behind a legal practice dashboard.
//! The backend REST service stays the single authority; this client holds
//! and keeps synchronized the in-memory views.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
