//! User status entities - the bulk snapshot delivered at session start

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::emoji::{EmojiSelection, ReactionType};
use crate::value_objects::UserId;

/// One user's status as it appears in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<ReactionType>,
    /// Seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<i64>,
    /// Deprecated mirror of `!presence_enabled`; not cached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<bool>,
}

impl SnapshotEntry {
    /// Non-empty status text, if any
    pub fn text(&self) -> Option<&str> {
        self.status_text.as_deref().filter(|s| !s.is_empty())
    }

    /// The emoji identity when an emoji name is present
    pub fn emoji_selection(&self) -> Option<EmojiSelection> {
        let name = self.emoji_name.as_deref().filter(|s| !s.is_empty())?;
        Some(EmojiSelection::new(
            name,
            self.emoji_code.clone().unwrap_or_default(),
            self.reaction_type.unwrap_or_default(),
        ))
    }

    /// Scheduled end time as a UTC datetime
    pub fn scheduled_end_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_end_time
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Bulk status state, keyed by textual user id (JSON has no integer keys)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub user_status: HashMap<String, SnapshotEntry>,
}

impl StatusSnapshot {
    /// Parse the keys and order entries by ascending numeric user id.
    ///
    /// Returns the parsed entries and the keys that were not integers.
    pub fn entries_by_user(&self) -> (Vec<(UserId, &SnapshotEntry)>, Vec<&str>) {
        let mut entries = Vec::with_capacity(self.user_status.len());
        let mut invalid = Vec::new();

        for (key, entry) in &self.user_status {
            match UserId::parse(key) {
                Ok(user_id) => entries.push((user_id, entry)),
                Err(_) => invalid.push(key.as_str()),
            }
        }

        entries.sort_by_key(|(user_id, _)| *user_id);
        (entries, invalid)
    }
}

/// Whether either half of a status is set
pub fn user_has_status_set(status_text: Option<&str>, emoji_name: Option<&str>) -> bool {
    status_text.is_some_and(|s| !s.is_empty()) || emoji_name.is_some_and(|s| !s.is_empty())
}
