//! Ports - interfaces to the collaborators the status cache depends on
//!
//! The domain layer defines what it needs; the cache and client crates
//! provide the implementations.

use async_trait::async_trait;

use crate::entities::{
    EmojiRenderingDetails, EmojiSelection, UpdateSettingsRequest, UpdateStatusRequest,
};
use crate::error::DomainError;

/// Result type for port operations
pub type PortResult<T> = Result<T, DomainError>;

// ============================================================================
// Emoji Resolution
// ============================================================================

pub trait EmojiResolver: Send + Sync {
    /// Resolve an emoji identity into rendering details (glyph vs. image)
    fn details_for_rendering(&self, selection: &EmojiSelection)
        -> PortResult<EmojiRenderingDetails>;

    /// Default rendering details for a built-in emoji name
    fn details_by_name(&self, emoji_name: &str) -> PortResult<EmojiRenderingDetails>;
}

// ============================================================================
// Status Transport
// ============================================================================

#[async_trait]
pub trait StatusTransport: Send + Sync {
    /// Persist the current user's status server-side
    async fn update_status(&self, request: &UpdateStatusRequest) -> PortResult<()>;

    /// Change account settings (presence visibility)
    async fn update_settings(&self, request: &UpdateSettingsRequest) -> PortResult<()>;
}
