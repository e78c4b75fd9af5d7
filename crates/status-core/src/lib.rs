//! # status-core
//!
//! Domain layer for the user status cache: value objects, entities, inbound
//! events, and the ports for emoji resolution and network transport.
//! This crate has zero dependencies on infrastructure (HTTP client, runtime, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    user_has_status_set, EmojiRenderingDetails, EmojiSelection, Emojiset, ReactionType,
    SnapshotEntry, StatusSnapshot, UpdateSettingsRequest, UpdateStatusRequest,
    UserStatusEmojiInfo, MAX_STATUS_TEXT_LENGTH,
};
pub use error::DomainError;
pub use events::{UserStatusEvent, USER_STATUS_EVENT_TYPE};
pub use traits::{EmojiResolver, PortResult, StatusTransport};
pub use value_objects::{TimeKey, UserId, UserIdParseError};
