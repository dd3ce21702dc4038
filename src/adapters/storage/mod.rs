//! Durable client-side storage adapters.

mod file_credential_store;
mod in_memory_credential_store;

pub use file_credential_store::FileCredentialStore;
pub use in_memory_credential_store::InMemoryCredentialStore;
