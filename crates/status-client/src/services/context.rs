//! Client context - dependency container for the status client
//!
//! Holds the shared status store, the outbound service, and the identity of
//! the current user.

use std::sync::Arc;

use status_cache::{EmojiCatalog, SharedStatusStore, StatusStore};
use status_common::AppConfig;
use status_core::{EmojiResolver, StatusSnapshot, StatusTransport, UserId, UserStatusEvent};
use tracing::info;

use super::editor::StatusEditor;
use super::error::{ServiceError, ServiceResult};
use super::status::StatusService;
use crate::transport::HttpTransport;

/// Client context containing all dependencies
#[derive(Clone)]
pub struct ClientContext {
    store: SharedStatusStore,
    service: StatusService,
    current_user_id: UserId,
}

impl ClientContext {
    /// Create a new client context with all dependencies
    pub fn new(store: SharedStatusStore, service: StatusService, current_user_id: UserId) -> Self {
        Self {
            store,
            service,
            current_user_id,
        }
    }

    /// Wire up the built-in emoji catalog and the HTTP transport
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let transport: Arc<dyn StatusTransport> = Arc::new(HttpTransport::from_config(config)?);
        let resolver: Arc<dyn EmojiResolver> = Arc::new(EmojiCatalog::new());

        let ctx = ClientContextBuilder::new()
            .resolver(resolver)
            .transport(transport)
            .current_user_id(config.account.user_id)
            .emojiset(config.display.emojiset)
            .build()?;

        info!(
            server = %config.server.url,
            user_id = %config.account.user_id,
            "Client context ready"
        );
        Ok(ctx)
    }

    // === Store ===

    /// Get the shared status store
    pub fn store(&self) -> &SharedStatusStore {
        &self.store
    }

    /// Seed the store from the session's bulk snapshot
    pub fn initialize(&self, snapshot: &StatusSnapshot) {
        self.store.write().initialize(snapshot);
    }

    /// Validate and apply a pushed `user_status` event
    pub fn dispatch_event(&self, raw: &serde_json::Value) -> ServiceResult<UserStatusEvent> {
        Ok(self.store.write().apply_event(raw)?)
    }

    // === Services ===

    /// Get the outbound status service
    pub fn service(&self) -> &StatusService {
        &self.service
    }

    /// Id of the user this client acts as
    pub fn current_user_id(&self) -> UserId {
        self.current_user_id
    }

    /// Open the status dialog for the current user
    pub fn editor(&self) -> StatusEditor {
        StatusEditor::open(&self.store.read(), self.current_user_id)
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("store", &"SharedStatusStore")
            .field("current_user_id", &self.current_user_id)
            .finish()
    }
}

/// Builder for creating ClientContext with custom collaborators
#[derive(Default)]
pub struct ClientContextBuilder {
    resolver: Option<Arc<dyn EmojiResolver>>,
    transport: Option<Arc<dyn StatusTransport>>,
    current_user_id: Option<UserId>,
    emojiset: status_core::Emojiset,
}

impl ClientContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver(mut self, resolver: Arc<dyn EmojiResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn StatusTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn current_user_id(mut self, user_id: UserId) -> Self {
        self.current_user_id = Some(user_id);
        self
    }

    pub fn emojiset(mut self, emojiset: status_core::Emojiset) -> Self {
        self.emojiset = emojiset;
        self
    }

    /// Build the ClientContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the transport or user id is missing
    pub fn build(self) -> ServiceResult<ClientContext> {
        let transport = self
            .transport
            .ok_or_else(|| ServiceError::validation("transport is required"))?;
        let current_user_id = self
            .current_user_id
            .ok_or_else(|| ServiceError::validation("current_user_id is required"))?;
        let resolver = self
            .resolver
            .unwrap_or_else(|| Arc::new(EmojiCatalog::new()));

        Ok(ClientContext::new(
            StatusStore::new(resolver, self.emojiset).into_shared(),
            StatusService::new(transport),
            current_user_id,
        ))
    }
}
