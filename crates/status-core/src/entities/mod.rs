//! Domain entities - status snapshot, emoji info, and request bodies

mod emoji;
mod status_update;
mod user_status;

pub use emoji::{
    EmojiRenderingDetails, EmojiSelection, Emojiset, ReactionType, UserStatusEmojiInfo,
};
pub use status_update::{UpdateSettingsRequest, UpdateStatusRequest, MAX_STATUS_TEXT_LENGTH};
pub use user_status::{user_has_status_set, SnapshotEntry, StatusSnapshot};
