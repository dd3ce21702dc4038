//! REST implementation of the auth gateway.
//!
//! Wire shapes follow the authority's conventions: the login exchange is
//! snake_case, seat-pool snapshots are camelCase, and rejections carry a
//! human-readable `message` that callers surface verbatim.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::identity::{AccessToken, Identity, LicensePool, SessionToken};
use crate::ports::{AuthGateway, GatewayError, LoginResponse};

use super::client::ApiClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    user: Identity,
    access_token: String,
    session_token: String,
}

pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, GatewayError> {
        let request = self.client.post("/auth/login").json(&LoginRequest {
            email,
            password: password.expose_secret(),
        });
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        let body: LoginBody = self.client.json(response).await?;

        tracing::info!(user_id = %body.user.id, "Login accepted");
        Ok(LoginResponse {
            identity: body.user,
            access_token: AccessToken::new(body.access_token),
            session_token: SessionToken::new(body.session_token),
        })
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        let request = self.client.post("/auth/logout");
        let response = self.client.send(request).await?;
        self.client.check_status(response).await?;
        Ok(())
    }

    async fn license_info(&self) -> Result<LicensePool, GatewayError> {
        let request = self.client.get("/auth/license-info");
        let response = self.client.send(request).await?;
        let response = self.client.check_status(response).await?;
        self.client.json(response).await
    }

    async fn force_logout(&self, user_id: &UserId) -> Result<(), GatewayError> {
        let path = format!("/auth/force-logout/{}", user_id);
        let request = self.client.delete(&path);
        let response = self.client.send(request).await?;
        self.client.check_status(response).await?;
        tracing::info!(%user_id, "Session terminated");
        Ok(())
    }

    fn install_session(&self, token: Option<SessionToken>) {
        self.client.install_session(token);
    }
}

impl std::fmt::Debug for HttpAuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthGateway").finish_non_exhaustive()
    }
}
