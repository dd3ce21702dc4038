//! SessionManager - authenticated identity and license-seat accounting.
//!
//! Tracks the authenticated identity, mirrors the finite pool of
//! concurrent login seats, and exposes administrative seat reclamation.
//!
//! # Failure tiers
//!
//! User-initiated mutations (`login`, `force_logout_user`) propagate the
//! authority's message; advisory refreshes (`fetch_license_info` and the
//! implicit refreshes after login/`check_auth`) only log. A stuck
//! backend must never trap a user in a logged-in UI state, so `logout`
//! clears local state no matter what the network does.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use crate::domain::identity::{
    AuthError, Identity, LicensePool, StoredCredentials,
};
use crate::domain::foundation::UserId;
use crate::ports::{AuthGateway, CredentialStore, CredentialStoreError, IdentityProvider};

/// Store state mirrored for the UI.
#[derive(Debug, Clone, Default)]
struct AuthState {
    identity: Option<Identity>,
    authenticated: bool,
    license: Option<LicensePool>,
    last_error: Option<String>,
}

/// The session/license manager.
///
/// The seat count and active-session list are authority-owned truth:
/// this service never increments or decrements them locally, it only
/// re-fetches after any action that could change them.
pub struct SessionManager {
    gateway: Arc<dyn AuthGateway>,
    credentials: Arc<dyn CredentialStore>,
    state: RwLock<AuthState>,
}

impl SessionManager {
    pub fn new(gateway: Arc<dyn AuthGateway>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            gateway,
            credentials,
            state: RwLock::new(AuthState::default()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// The authenticated identity, or `None`.
    pub async fn identity(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    /// Whether a session is active.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.authenticated
    }

    /// The most recent license pool snapshot, if one has been fetched.
    pub async fn license(&self) -> Option<LicensePool> {
        self.state.read().await.license.clone()
    }

    /// The message from the last failed user-initiated operation.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Authenticates against the authority.
    ///
    /// On success: persists identity and both tokens, installs the
    /// session credential for subsequent calls, marks authenticated, and
    /// refreshes the license pool best-effort. On rejection the
    /// authority's message lands in `last_error` verbatim and state
    /// stays unauthenticated.
    ///
    /// # Errors
    ///
    /// - `Rejected` with the authority's message (invalid credentials,
    ///   seat limit reached)
    /// - `Network` when the authority is unreachable
    pub async fn login(&self, email: &str, password: SecretString) -> Result<Identity, AuthError> {
        let response = match self.gateway.login(email, &password).await {
            Ok(response) => response,
            Err(err) => {
                let err = AuthError::from(err);
                let mut state = self.state.write().await;
                state.identity = None;
                state.authenticated = false;
                state.last_error = Some(err.message());
                return Err(err);
            }
        };

        let stored = StoredCredentials {
            access_token: response.access_token.clone(),
            session_token: response.session_token.clone(),
            identity: response.identity.clone(),
        };
        if let Err(err) = self.credentials.save(&stored).await {
            // The in-memory session is still valid; only restore-on-start
            // is degraded.
            tracing::warn!("Failed to persist credentials: {}", err);
        }

        self.gateway.install_session(Some(response.session_token));

        {
            let mut state = self.state.write().await;
            state.identity = Some(response.identity.clone());
            state.authenticated = true;
            state.last_error = None;
        }

        self.refresh_license_advisory().await;
        Ok(response.identity)
    }

    /// Ends the session. Always succeeds locally.
    ///
    /// The authority call releasing the seat is best-effort: a network
    /// failure is logged and swallowed, credentials and state are
    /// cleared regardless.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.logout().await {
            tracing::warn!("Logout call failed, clearing local session anyway: {}", err);
        }
        if let Err(err) = self.credentials.clear().await {
            tracing::warn!("Failed to clear stored credentials: {}", err);
        }
        self.gateway.install_session(None);

        let mut state = self.state.write().await;
        *state = AuthState::default();
    }

    /// Restores identity from durable storage at process start, with no
    /// network round trip. Returns whether a session was restored.
    ///
    /// Malformed cached state is cleared and treated as logged out; an
    /// unreadable store also yields logged out, with the failure
    /// recorded in `last_error`. After a successful restore the license
    /// pool is refreshed best-effort.
    pub async fn check_auth(&self) -> bool {
        match self.credentials.load().await {
            Ok(Some(stored)) => {
                self.gateway.install_session(Some(stored.session_token));
                {
                    let mut state = self.state.write().await;
                    state.identity = Some(stored.identity);
                    state.authenticated = true;
                    state.last_error = None;
                }
                self.refresh_license_advisory().await;
                true
            }
            Ok(None) => {
                let mut state = self.state.write().await;
                *state = AuthState::default();
                false
            }
            Err(CredentialStoreError::Malformed(reason)) => {
                tracing::warn!("Stored credentials malformed, clearing: {}", reason);
                if let Err(err) = self.credentials.clear().await {
                    tracing::warn!("Failed to clear malformed credentials: {}", err);
                }
                let mut state = self.state.write().await;
                *state = AuthState::default();
                false
            }
            Err(err) => {
                tracing::warn!("Failed to read stored credentials: {}", err);
                let failure = AuthError::Storage(err.to_string());
                let mut state = self.state.write().await;
                *state = AuthState::default();
                state.last_error = Some(failure.message());
                false
            }
        }
    }

    /// Refreshes the license pool snapshot. Advisory: failures are
    /// logged, never surfaced, and never touch `last_error`.
    pub async fn fetch_license_info(&self) {
        self.refresh_license_advisory().await;
    }

    /// Terminates another user's session, freeing a seat. Admin-only:
    /// the acting role is checked locally before the authority is asked,
    /// and the authority enforces it again server-side.
    ///
    /// On success the pool is re-fetched rather than decremented
    /// locally.
    ///
    /// # Errors
    ///
    /// - `NotAuthenticated` when no session is active
    /// - `Forbidden` when the acting role may not manage seats
    /// - `Rejected` with the authority's message, for the caller to alert
    pub async fn force_logout_user(&self, user_id: &UserId) -> Result<(), AuthError> {
        let acting = {
            let state = self.state.read().await;
            if !state.authenticated {
                return Err(AuthError::NotAuthenticated);
            }
            state.identity.clone()
        };
        if !acting.is_some_and(|identity| identity.role.can_manage_seats()) {
            return Err(AuthError::Forbidden(
                "Only administrators can terminate other sessions".to_string(),
            ));
        }

        self.gateway
            .force_logout(user_id)
            .await
            .map_err(AuthError::from)?;
        self.refresh_license_advisory().await;
        Ok(())
    }

    async fn refresh_license_advisory(&self) {
        match self.gateway.license_info().await {
            Ok(pool) => {
                if !pool.is_consistent() {
                    tracing::warn!(
                        used = pool.used,
                        sessions = pool.active_sessions.len(),
                        limit = pool.limit,
                        "License snapshot fails seat-count invariant"
                    );
                }
                self.state.write().await.license = Some(pool);
            }
            Err(err) => {
                tracing::warn!("License info refresh failed: {}", err);
            }
        }
    }
}

#[async_trait]
impl IdentityProvider for SessionManager {
    async fn current_identity(&self) -> Option<Identity> {
        let state = self.state.read().await;
        if state.authenticated {
            state.identity.clone()
        } else {
            None
        }
    }
}
