//! Identity provider port.

use async_trait::async_trait;

use crate::domain::identity::Identity;

/// Who the current actor is.
///
/// The calendar engine depends on the session manager only through this
/// contract: to attribute new events and to resolve the "mine" scope.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The authenticated identity, or `None` when logged out.
    async fn current_identity(&self) -> Option<Identity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn IdentityProvider) {}
    }
}
