//! Adapters: concrete implementations of the ports.
//!
//! HTTP adapters talk to the backend authority over REST; storage
//! adapters persist client-side credential state.

pub mod http;
pub mod storage;
