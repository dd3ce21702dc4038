//! Shared HTTP client for the backend authority.
//!
//! Holds the base URL, the connection pool, and the session token that
//! scopes authenticated requests. Installing or clearing the token takes
//! effect on the next request; in-flight requests keep the header they
//! were built with.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::domain::identity::SessionToken;
use crate::ports::GatewayError;

const SESSION_HEADER: &str = "x-session-token";

/// Error body shape the authority uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session_token: RwLock<Option<SessionToken>>,
}

impl ApiClient {
    /// Builds a client with no client-enforced deadline: requests run to
    /// completion or transport failure.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::build(base_url, None)
    }

    /// Builds a client with an opt-in request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::build(base_url, Some(timeout))
    }

    /// Builds the client an application would wire from its loaded
    /// configuration.
    pub fn from_config(config: &crate::config::ApiConfig) -> Self {
        Self::build(&config.base_url, config.timeout())
    }

    fn build(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session_token: RwLock::new(None),
        }
    }

    /// Installs the session credential used by subsequent requests, or
    /// clears it with `None`.
    pub fn install_session(&self, token: Option<SessionToken>) {
        if let Ok(mut guard) = self.session_token.write() {
            *guard = token;
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.with_session(self.http.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.with_session(self.http.post(self.url(path)))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.with_session(self.http.put(self.url(path)))
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.with_session(self.http.patch(self.url(path)))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.with_session(self.http.delete(self.url(path)))
    }

    fn with_session(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self
            .session_token
            .read()
            .ok()
            .and_then(|guard| guard.clone());
        match token {
            Some(token) => builder.header(SESSION_HEADER, token.as_str()),
            None => builder,
        }
    }

    /// Sends a request and maps the transport error.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))
    }

    /// Turns a non-success response into the rejection the authority
    /// reported, falling back to the status line when the body carries
    /// no message.
    pub async fn check_status(&self, response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status_fallback(status);
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.trim().is_empty() => body.message,
            _ => fallback,
        };
        tracing::debug!(%status, %message, "Request rejected by authority");
        Err(GatewayError::rejected(message))
    }

    /// Decodes a JSON response body.
    pub async fn json<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, GatewayError> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

fn status_fallback(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED => "Authentication required".to_string(),
        StatusCode::FORBIDDEN => "Operation not permitted".to_string(),
        StatusCode::NOT_FOUND => "Resource not found".to_string(),
        other => format!("Request failed with status {}", other),
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(
            client.url("/calendar/events"),
            "https://api.example.com/calendar/events"
        );
    }

    #[test]
    fn status_fallbacks_name_the_failure() {
        assert_eq!(
            status_fallback(StatusCode::UNAUTHORIZED),
            "Authentication required"
        );
        assert_eq!(
            status_fallback(StatusCode::BAD_GATEWAY),
            "Request failed with status 502 Bad Gateway"
        );
    }

    #[test]
    fn api_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }

    #[tokio::test]
    async fn default_client_enforces_no_deadline() {
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold connections open, never responding.
            let mut held = Vec::new();
            loop {
                if let Ok((socket, _)) = listener.accept().await {
                    held.push(socket);
                }
            }
        });

        let client = ApiClient::new(format!("http://{}", addr));
        let pending = client.send(client.get("/auth/license-info"));
        tokio::pin!(pending);

        // A client-enforced timeout would surface as an error within its
        // window; the default client must still be waiting on the silent
        // server well past any such window.
        tokio::select! {
            result = &mut pending => panic!("request ended early: {:?}", result),
            _ = tokio::time::sleep(Duration::from_secs(16)) => {}
        }
    }
}
