//! reqwest implementation of [`StatusTransport`].
//!
//! Requests carry JSON bodies and are authenticated with HTTP basic auth
//! (account email + API key).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use status_common::{AccountConfig, AppConfig, ServerConfig};
use status_core::{
    DomainError, PortResult, StatusTransport, UpdateSettingsRequest, UpdateStatusRequest,
};
use tracing::{debug, instrument, warn};

use super::reply::ServerReply;

/// Path of the "update my status" endpoint
pub const UPDATE_STATUS_PATH: &str = "/json/users/me/status";
/// Path of the account settings endpoint
pub const SETTINGS_PATH: &str = "/json/settings";

/// HTTP transport for status requests
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    server: ServerConfig,
    email: String,
    api_key: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("server", &self.server.url)
            .field("email", &self.email)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTransport {
    /// Build a transport for one account on one server
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(server: ServerConfig, account: &AccountConfig) -> PortResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs))
            .user_agent(concat!("status-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            server,
            email: account.email.clone(),
            api_key: account.api_key.clone(),
        })
    }

    /// Build a transport from the loaded client configuration
    pub fn from_config(config: &AppConfig) -> PortResult<Self> {
        Self::new(config.server.clone(), &config.account)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.server.url
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> PortResult<()> {
        let response = request
            .basic_auth(&self.email, Some(&self.api_key))
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "Request did not complete");
                DomainError::transport(e.status().map(|s| s.as_u16()), e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(path, status = status.as_u16(), "Request confirmed");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = ServerReply::parse(&body)
            .and_then(|reply| reply.error_message())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        warn!(path, status = status.as_u16(), message = %message, "Request rejected");
        Err(DomainError::transport(Some(status.as_u16()), message))
    }
}

#[async_trait]
impl StatusTransport for HttpTransport {
    #[instrument(skip(self, request), fields(status_text = %request.status_text, emoji = %request.emoji_name))]
    async fn update_status(&self, request: &UpdateStatusRequest) -> PortResult<()> {
        let url = self.server.endpoint(UPDATE_STATUS_PATH);
        self.send(self.client.post(url).json(request), UPDATE_STATUS_PATH)
            .await
    }

    #[instrument(skip(self))]
    async fn update_settings(&self, request: &UpdateSettingsRequest) -> PortResult<()> {
        let url = self.server.endpoint(SETTINGS_PATH);
        self.send(self.client.patch(url).json(request), SETTINGS_PATH)
            .await
    }
}
