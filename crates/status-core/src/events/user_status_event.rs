//! Inbound `user_status` change notifications
//!
//! Events arrive as untyped JSON from the event queue. They are checked here,
//! at the boundary, and only a typed [`UserStatusEvent`] ever reaches the store.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::{EmojiSelection, ReactionType};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// The only accepted value of the `type` field
pub const USER_STATUS_EVENT_TYPE: &str = "user_status";

/// A validated status change for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserStatusEvent {
    /// Event queue id
    pub id: i64,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_event_type"))]
    pub event_type: String,

    pub user_id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<ReactionType>,

    /// Only sent to the user who set the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<bool>,
}

fn validate_event_type(event_type: &str) -> Result<(), ValidationError> {
    if event_type == USER_STATUS_EVENT_TYPE {
        Ok(())
    } else {
        Err(ValidationError::new("event_type")
            .with_message(format!("expected \"{USER_STATUS_EVENT_TYPE}\", got \"{event_type}\"").into()))
    }
}

impl UserStatusEvent {
    /// Check structure and field types, then the `type` literal.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEvent`] for any schema mismatch.
    pub fn parse(value: &serde_json::Value) -> Result<Self, DomainError> {
        let event = Self::deserialize(value).map_err(|e| DomainError::InvalidEvent(e.to_string()))?;
        event
            .validate()
            .map_err(|e| DomainError::InvalidEvent(e.to_string()))?;
        Ok(event)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidEvent(e.to_string()))?;
        Self::parse(&value)
    }

    /// The emoji carried by this event; `None` when the name is absent or empty
    pub fn emoji_selection(&self) -> Option<EmojiSelection> {
        let name = self.emoji_name.as_deref().filter(|s| !s.is_empty())?;
        Some(EmojiSelection::new(
            name,
            self.emoji_code.clone().unwrap_or_default(),
            self.reaction_type.unwrap_or_default(),
        ))
    }

    /// Whether the event touches the emoji half of the status
    #[inline]
    pub fn has_emoji_field(&self) -> bool {
        self.emoji_name.is_some()
    }
}
