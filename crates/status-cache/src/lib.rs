//! # status-cache
//!
//! In-memory caching layer for user statuses.
//!
//! ## Features
//!
//! - **Status Store**: Per-session status text and emoji maps plus the session end time
//! - **Expiry**: Absolute end times for the "clear status after" choices
//! - **Emoji**: Built-in catalog resolving emoji identities to rendering details
//!
//! ## Example
//!
//! ```ignore
//! use status_cache::{EmojiCatalog, StatusStore};
//!
//! let mut store = StatusStore::new(Arc::new(EmojiCatalog::new()), Emojiset::Google);
//! store.initialize(&snapshot);
//!
//! // Apply a pushed event
//! store.apply_event(&raw_event)?;
//! let text = store.get_status_text(user_id);
//! ```

pub mod emoji;
pub mod expiry;
pub mod store;

// Re-export emoji types
pub use emoji::{EmojiCatalog, RealmEmoji, ZULIP_EXTRA_EMOJI_NAME, ZULIP_EXTRA_EMOJI_URL};

// Re-export expiry types
pub use expiry::{
    compute_scheduled_end_time, compute_scheduled_end_time_at, to_wire_seconds, ScheduledEndTimes,
};

// Re-export store types
pub use store::{SharedStatusStore, StatusStore};
