//! Emoji entities - selections, rendering details, and display preferences

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an emoji comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    /// Built-in emoji identified by its codepoint sequence
    #[default]
    UnicodeEmoji,
    /// Custom emoji uploaded to the organization
    RealmEmoji,
    /// Emoji shipped by the server that is not part of Unicode
    ZulipExtraEmoji,
}

impl ReactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnicodeEmoji => "unicode_emoji",
            Self::RealmEmoji => "realm_emoji",
            Self::ZulipExtraEmoji => "zulip_extra_emoji",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode_emoji" => Ok(Self::UnicodeEmoji),
            "realm_emoji" => Ok(Self::RealmEmoji),
            "zulip_extra_emoji" => Ok(Self::ZulipExtraEmoji),
            _ => Err(format!("Invalid reaction type: {s}")),
        }
    }
}

/// The user's emoji display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Emojiset {
    #[default]
    Google,
    Twitter,
    /// Emoji are shown as `:name:` text
    Text,
}

impl Emojiset {
    /// Whether emoji should render as their alt text
    #[must_use]
    pub fn uses_alt_code(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl std::str::FromStr for Emojiset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "twitter" => Ok(Self::Twitter),
            "text" => Ok(Self::Text),
            _ => Err(format!("Invalid emojiset: {s}")),
        }
    }
}

/// Emoji identity as chosen by a user or carried on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiSelection {
    pub emoji_name: String,
    #[serde(default)]
    pub emoji_code: String,
    #[serde(default)]
    pub reaction_type: ReactionType,
}

impl EmojiSelection {
    /// Create a new selection
    pub fn new(
        emoji_name: impl Into<String>,
        emoji_code: impl Into<String>,
        reaction_type: ReactionType,
    ) -> Self {
        Self {
            emoji_name: emoji_name.into(),
            emoji_code: emoji_code.into(),
            reaction_type,
        }
    }

    /// Unicode emoji known only by name; the resolver fills in the code
    pub fn by_name(emoji_name: impl Into<String>) -> Self {
        Self::new(emoji_name, "", ReactionType::UnicodeEmoji)
    }
}

/// Resolved presentation data for an emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRenderingDetails {
    pub emoji_name: String,
    pub emoji_code: String,
    pub reaction_type: ReactionType,
    /// Image URL for custom emoji; unicode emoji render as a glyph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Non-animated variant of `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still_url: Option<String>,
}

impl EmojiRenderingDetails {
    /// Check if this emoji renders as an image
    #[inline]
    pub fn is_image(&self) -> bool {
        self.url.is_some()
    }

    /// Check if this emoji was uploaded to the organization
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.reaction_type == ReactionType::RealmEmoji
    }

    /// CSS-style glyph class for unicode emoji, e.g. `emoji-1f68c`
    pub fn glyph_class(&self) -> Option<String> {
        (self.reaction_type == ReactionType::UnicodeEmoji)
            .then(|| format!("emoji-{}", self.emoji_code))
    }

    /// The identity this was resolved from
    pub fn selection(&self) -> EmojiSelection {
        EmojiSelection::new(&self.emoji_name, &self.emoji_code, self.reaction_type)
    }
}

/// Emoji info cached per user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatusEmojiInfo {
    #[serde(flatten)]
    pub details: EmojiRenderingDetails,
    /// Set when the viewer's emojiset renders emoji as text
    #[serde(default)]
    pub emoji_alt_code: bool,
}

impl UserStatusEmojiInfo {
    pub fn new(details: EmojiRenderingDetails, emoji_alt_code: bool) -> Self {
        Self {
            details,
            emoji_alt_code,
        }
    }

    #[inline]
    pub fn emoji_name(&self) -> &str {
        &self.details.emoji_name
    }

    /// Compare the identity fields (name, code, type) with a selection
    pub fn same_emoji(&self, selection: &EmojiSelection) -> bool {
        self.details.emoji_name == selection.emoji_name
            && self.details.emoji_code == selection.emoji_code
            && self.details.reaction_type == selection.reaction_type
    }
}
