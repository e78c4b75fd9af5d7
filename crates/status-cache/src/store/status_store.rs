//! Per-session user status cache.
//!
//! Status text and emoji are kept in two independent maps: a user can have
//! text only, emoji only, both, or neither. Empty values are never stored.

use parking_lot::RwLock;
use status_core::{
    user_has_status_set, DomainError, EmojiResolver, EmojiSelection, Emojiset, StatusSnapshot,
    UserId, UserStatusEmojiInfo, UserStatusEvent,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Store shared between the event dispatcher and the status editor
pub type SharedStatusStore = Arc<RwLock<StatusStore>>;

/// User status store
pub struct StatusStore {
    status_text: HashMap<UserId, String>,
    status_emoji: HashMap<UserId, UserStatusEmojiInfo>,
    /// Expiry of the current user's status, in seconds
    scheduled_end_time: Option<i64>,
    emoji: Arc<dyn EmojiResolver>,
    emojiset: Emojiset,
}

impl std::fmt::Debug for StatusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusStore")
            .field("status_text", &self.status_text)
            .field("status_emoji", &self.status_emoji)
            .field("scheduled_end_time", &self.scheduled_end_time)
            .field("emojiset", &self.emojiset)
            .finish_non_exhaustive()
    }
}

impl StatusStore {
    /// Create an empty store
    #[must_use]
    pub fn new(emoji: Arc<dyn EmojiResolver>, emojiset: Emojiset) -> Self {
        Self {
            status_text: HashMap::new(),
            status_emoji: HashMap::new(),
            scheduled_end_time: None,
            emoji,
            emojiset,
        }
    }

    /// Wrap the store for sharing across tasks
    #[must_use]
    pub fn into_shared(self) -> SharedStatusStore {
        Arc::new(RwLock::new(self))
    }

    /// The emoji resolver this store renders with
    pub fn emoji_resolver(&self) -> &dyn EmojiResolver {
        self.emoji.as_ref()
    }

    /// Change the emojiset used for entries stored from now on
    pub fn set_emojiset(&mut self, emojiset: Emojiset) {
        self.emojiset = emojiset;
    }

    /// Seed the store from the bulk snapshot.
    ///
    /// Clears status text (emoji entries are only overwritten). Entries are
    /// applied in ascending user id order and every entry overwrites the
    /// session end time, so the last user's value is the one that survives.
    pub fn initialize(&mut self, snapshot: &StatusSnapshot) {
        self.status_text.clear();

        let (entries, invalid) = snapshot.entries_by_user();
        for key in invalid {
            tracing::warn!(key, "Skipping user status with non-integer user id");
        }

        for (user_id, entry) in entries {
            if let Some(text) = entry.text() {
                self.status_text.insert(user_id, text.to_string());
            }

            self.set_scheduled_end_time(entry.scheduled_end_time);

            if let Some(selection) = entry.emoji_selection() {
                self.set_emoji_selection(user_id, Some(&selection));
            }
        }

        tracing::debug!(
            users = snapshot.user_status.len(),
            with_text = self.status_text.len(),
            with_emoji = self.status_emoji.len(),
            scheduled_end_time = ?self.scheduled_end_time,
            "Initialized user status store"
        );
    }

    /// Get a user's status text
    pub fn get_status_text(&self, user_id: UserId) -> Option<&str> {
        self.status_text.get(&user_id).map(String::as_str)
    }

    /// Set a user's status text; empty text removes it
    pub fn set_status_text(&mut self, user_id: UserId, status_text: &str) {
        if status_text.is_empty() {
            self.status_text.remove(&user_id);
        } else {
            self.status_text.insert(user_id, status_text.to_string());
        }

        tracing::trace!(user_id = %user_id, status_text, "Set status text");
    }

    /// Get a user's emoji rendering info
    pub fn get_status_emoji(&self, user_id: UserId) -> Option<&UserStatusEmojiInfo> {
        self.status_emoji.get(&user_id)
    }

    /// Apply the emoji half of a validated event; an empty name removes it
    pub fn set_status_emoji(&mut self, event: &UserStatusEvent) {
        self.set_emoji_selection(event.user_id, event.emoji_selection().as_ref());
    }

    /// Set or remove a user's emoji from an emoji identity.
    ///
    /// An emoji that cannot be resolved is treated as no emoji.
    pub fn set_emoji_selection(&mut self, user_id: UserId, selection: Option<&EmojiSelection>) {
        let Some(selection) = selection.filter(|s| !s.emoji_name.is_empty()) else {
            self.status_emoji.remove(&user_id);
            tracing::trace!(user_id = %user_id, "Removed status emoji");
            return;
        };

        match self.emoji.details_for_rendering(selection) {
            Ok(details) => {
                let info = UserStatusEmojiInfo::new(details, self.emojiset.uses_alt_code());
                self.status_emoji.insert(user_id, info);
                tracing::trace!(user_id = %user_id, emoji = %selection.emoji_name, "Set status emoji");
            }
            Err(e) => {
                self.status_emoji.remove(&user_id);
                tracing::warn!(
                    user_id = %user_id,
                    emoji = %selection.emoji_name,
                    error = %e,
                    "Could not resolve status emoji"
                );
            }
        }
    }

    /// Expiry of the current user's status, in seconds
    pub fn get_scheduled_end_time(&self) -> Option<i64> {
        self.scheduled_end_time
    }

    pub fn set_scheduled_end_time(&mut self, scheduled_end_time: Option<i64>) {
        self.scheduled_end_time = scheduled_end_time;
    }

    /// Whether a user has status text or a status emoji
    pub fn has_status(&self, user_id: UserId) -> bool {
        user_has_status_set(
            self.get_status_text(user_id),
            self.get_status_emoji(user_id).map(UserStatusEmojiInfo::emoji_name),
        )
    }

    /// Validate a raw `user_status` event and apply it.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEvent`] without touching the store when
    /// the event does not match the schema.
    pub fn apply_event(
        &mut self,
        raw: &serde_json::Value,
    ) -> Result<UserStatusEvent, DomainError> {
        let event = UserStatusEvent::parse(raw).map_err(|e| {
            tracing::warn!(error = %e, "Rejected user_status event");
            e
        })?;

        self.apply_validated_event(&event);
        Ok(event)
    }

    /// Apply only the fields the event carries
    pub fn apply_validated_event(&mut self, event: &UserStatusEvent) {
        if let Some(text) = &event.status_text {
            self.set_status_text(event.user_id, text);
        }

        if event.has_emoji_field() {
            self.set_status_emoji(event);
        }

        if event.scheduled_end_time.is_some() {
            self.set_scheduled_end_time(event.scheduled_end_time);
        }

        tracing::debug!(event_id = event.id, user_id = %event.user_id, "Applied user_status event");
    }
}
