//! Auth gateway port.
//!
//! Contract for the authority's login, logout, license-info, and
//! forced-logout endpoints.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::UserId;
use crate::domain::identity::{AccessToken, Identity, LicensePool, SessionToken};

use super::GatewayError;

/// What a successful login hands back.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub identity: Identity,
    pub access_token: AccessToken,
    pub session_token: SessionToken,
}

/// Port for the authority's auth/license surface.
///
/// Seat accounting lives entirely on the other side of this port: the
/// client only re-fetches `license_info` after anything that could
/// change occupancy.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for an identity and tokens.
    ///
    /// # Errors
    ///
    /// - `Rejected` with the authority's message (invalid credentials,
    ///   seat limit reached)
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, GatewayError>;

    /// Releases the current session's seat. Idempotent on the authority
    /// side; callers treat failure as best-effort.
    async fn logout(&self) -> Result<(), GatewayError>;

    /// Current pool snapshot.
    async fn license_info(&self) -> Result<LicensePool, GatewayError>;

    /// Terminates another user's session, freeing a seat. Admin-only,
    /// enforced by the authority.
    async fn force_logout(&self, user_id: &UserId) -> Result<(), GatewayError>;

    /// Installs (or with `None`, removes) the session credential sent as
    /// a custom header on subsequent calls from this gateway's client.
    fn install_session(&self, token: Option<SessionToken>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn AuthGateway) {}
    }
}
