//! Status service
//!
//! Sends the current user's status and presence visibility to the server.
//! Nothing here touches the local status store; callers re-derive local state
//! once a request is confirmed.

use std::sync::Arc;

use status_core::{StatusTransport, UpdateSettingsRequest, UpdateStatusRequest};
use tokio::task::JoinHandle;
use tracing::{info, instrument};
use validator::Validate;

use super::error::ServiceResult;

/// Outbound status operations
#[derive(Clone)]
pub struct StatusService {
    transport: Arc<dyn StatusTransport>,
}

impl std::fmt::Debug for StatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusService").finish_non_exhaustive()
    }
}

impl StatusService {
    /// Create a new StatusService
    pub fn new(transport: Arc<dyn StatusTransport>) -> Self {
        Self { transport }
    }

    /// Persist the current user's status.
    ///
    /// # Errors
    /// Returns a validation error for oversized fields, or a transport error
    /// when the server rejects the request or cannot be reached.
    #[instrument(skip(self, request), fields(status_text = %request.status_text))]
    pub async fn server_update_status(&self, request: &UpdateStatusRequest) -> ServiceResult<()> {
        request.validate()?;

        self.transport.update_status(request).await?;

        info!(
            emoji = %request.emoji_name,
            scheduled_end_time = ?request.scheduled_end_time,
            "Status updated"
        );
        Ok(())
    }

    /// Send a status update in the background.
    ///
    /// `on_success` runs only after the server confirms the update. The
    /// returned handle resolves to the request's outcome.
    pub fn spawn_update_status<F>(
        &self,
        request: UpdateStatusRequest,
        on_success: F,
    ) -> JoinHandle<ServiceResult<()>>
    where
        F: FnOnce() + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            service.server_update_status(&request).await?;
            on_success();
            Ok(())
        })
    }

    /// Hide the current user's presence from others
    #[instrument(skip(self))]
    pub async fn server_invisible_mode_on(&self) -> ServiceResult<()> {
        self.transport
            .update_settings(&UpdateSettingsRequest::invisible())
            .await?;
        info!("Invisible mode enabled");
        Ok(())
    }

    /// Make the current user's presence visible again
    #[instrument(skip(self))]
    pub async fn server_invisible_mode_off(&self) -> ServiceResult<()> {
        self.transport
            .update_settings(&UpdateSettingsRequest::visible())
            .await?;
        info!("Invisible mode disabled");
        Ok(())
    }
}
