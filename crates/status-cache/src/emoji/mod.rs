//! Emoji resolution module.

mod catalog;

pub use catalog::{EmojiCatalog, RealmEmoji, ZULIP_EXTRA_EMOJI_NAME, ZULIP_EXTRA_EMOJI_URL};
