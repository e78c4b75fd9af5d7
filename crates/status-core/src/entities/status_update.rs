//! Outbound request bodies for status and settings updates

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::emoji::{EmojiSelection, ReactionType};

/// Maximum status text length accepted by the server
pub const MAX_STATUS_TEXT_LENGTH: usize = 60;

/// Body of `POST /json/users/me/status`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(max = 60, message = "Status text must be at most 60 characters"))]
    pub status_text: String,

    #[validate(length(max = 100, message = "Emoji name must be at most 100 characters"))]
    pub emoji_name: String,

    pub emoji_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<ReactionType>,

    /// Seconds since the Unix epoch; omitted for "never"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<i64>,
}

impl UpdateStatusRequest {
    /// Build a request from text, optional emoji, and end time in seconds
    pub fn new(
        status_text: impl Into<String>,
        emoji: Option<&EmojiSelection>,
        scheduled_end_time: Option<i64>,
    ) -> Self {
        let (emoji_name, emoji_code, reaction_type) = match emoji {
            Some(e) => (e.emoji_name.clone(), e.emoji_code.clone(), Some(e.reaction_type)),
            None => (String::new(), String::new(), None),
        };

        Self {
            status_text: status_text.into(),
            emoji_name,
            emoji_code,
            reaction_type,
            scheduled_end_time,
        }
    }

    /// The emoji half of the request, if an emoji is set
    pub fn emoji_selection(&self) -> Option<EmojiSelection> {
        (!self.emoji_name.is_empty()).then(|| {
            EmojiSelection::new(
                &self.emoji_name,
                &self.emoji_code,
                self.reaction_type.unwrap_or_default(),
            )
        })
    }
}

/// Body of `PATCH /json/settings`, reduced to presence visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub presence_enabled: bool,
}

impl UpdateSettingsRequest {
    /// Hide presence from other users
    pub fn invisible() -> Self {
        Self {
            presence_enabled: false,
        }
    }

    /// Show presence again
    pub fn visible() -> Self {
        Self {
            presence_enabled: true,
        }
    }
}
