//! Built-in emoji resolution.
//!
//! Unicode emoji are looked up by name in a small table of the names the
//! status dialog offers; anything carrying an explicit code is passed through.
//! Custom realm emoji are registered at runtime with their image URLs.

use serde::{Deserialize, Serialize};
use status_core::{
    DomainError, EmojiRenderingDetails, EmojiResolver, EmojiSelection, PortResult, ReactionType,
};
use std::collections::HashMap;

/// Name of the only server-provided non-Unicode emoji
pub const ZULIP_EXTRA_EMOJI_NAME: &str = "zulip";
/// Image path of the server-provided extra emoji
pub const ZULIP_EXTRA_EMOJI_URL: &str = "/static/generated/emoji/images/emoji/unicode/zulip.png";

/// Unicode emoji known by name (name, codepoints)
const BUILTIN_EMOJI: &[(&str, &str)] = &[
    ("bus", "1f68c"),
    ("calendar", "1f4c6"),
    ("coffee", "2615"),
    ("hurt", "1f915"),
    ("house", "1f3e0"),
    ("office", "1f3e2"),
    ("palm_tree", "1f334"),
    ("working_on_it", "1f6e0"),
    ("smile", "1f642"),
    ("headphones", "1f3a7"),
    ("airplane", "2708"),
    ("sleeping", "1f634"),
    ("sick", "1f912"),
    ("tada", "1f389"),
    ("thumbs_up", "1f44d"),
];

/// A custom emoji uploaded to the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmEmoji {
    pub id: String,
    pub name: String,
    pub source_url: String,
    #[serde(default)]
    pub still_url: Option<String>,
    #[serde(default)]
    pub deactivated: bool,
}

impl RealmEmoji {
    fn details(&self) -> EmojiRenderingDetails {
        EmojiRenderingDetails {
            emoji_name: self.name.clone(),
            emoji_code: self.id.clone(),
            reaction_type: ReactionType::RealmEmoji,
            url: Some(self.source_url.clone()),
            still_url: self.still_url.clone(),
        }
    }
}

/// Emoji catalog implementing [`EmojiResolver`]
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    unicode_by_name: HashMap<String, String>,
    realm_by_id: HashMap<String, RealmEmoji>,
    realm_id_by_name: HashMap<String, String>,
}

impl Default for EmojiCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiCatalog {
    /// Create a catalog with the built-in unicode names
    pub fn new() -> Self {
        Self {
            unicode_by_name: BUILTIN_EMOJI
                .iter()
                .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
                .collect(),
            realm_by_id: HashMap::new(),
            realm_id_by_name: HashMap::new(),
        }
    }

    /// Register a unicode emoji name
    pub fn add_unicode(&mut self, name: impl Into<String>, code: impl Into<String>) {
        self.unicode_by_name.insert(name.into(), code.into());
    }

    /// Register (or replace) a custom realm emoji
    pub fn add_realm_emoji(&mut self, emoji: RealmEmoji) {
        if emoji.deactivated {
            self.realm_id_by_name.remove(&emoji.name);
        } else {
            self.realm_id_by_name
                .insert(emoji.name.clone(), emoji.id.clone());
        }
        self.realm_by_id.insert(emoji.id.clone(), emoji);
    }

    /// Builder form of [`add_realm_emoji`](Self::add_realm_emoji)
    #[must_use]
    pub fn with_realm_emoji(mut self, emoji: RealmEmoji) -> Self {
        self.add_realm_emoji(emoji);
        self
    }

    fn unicode_details(name: &str, code: &str) -> EmojiRenderingDetails {
        EmojiRenderingDetails {
            emoji_name: name.to_string(),
            emoji_code: code.to_string(),
            reaction_type: ReactionType::UnicodeEmoji,
            url: None,
            still_url: None,
        }
    }

    fn zulip_extra_details() -> EmojiRenderingDetails {
        EmojiRenderingDetails {
            emoji_name: ZULIP_EXTRA_EMOJI_NAME.to_string(),
            emoji_code: ZULIP_EXTRA_EMOJI_NAME.to_string(),
            reaction_type: ReactionType::ZulipExtraEmoji,
            url: Some(ZULIP_EXTRA_EMOJI_URL.to_string()),
            still_url: None,
        }
    }
}

impl EmojiResolver for EmojiCatalog {
    fn details_for_rendering(
        &self,
        selection: &EmojiSelection,
    ) -> PortResult<EmojiRenderingDetails> {
        match selection.reaction_type {
            // Deactivated realm emoji still render for statuses that use them
            ReactionType::RealmEmoji => self
                .realm_by_id
                .get(&selection.emoji_code)
                .map(RealmEmoji::details)
                .ok_or_else(|| DomainError::UnknownEmojiCode {
                    reaction_type: ReactionType::RealmEmoji,
                    code: selection.emoji_code.clone(),
                }),
            ReactionType::ZulipExtraEmoji => {
                if selection.emoji_name == ZULIP_EXTRA_EMOJI_NAME {
                    Ok(Self::zulip_extra_details())
                } else {
                    Err(DomainError::UnknownEmoji {
                        name: selection.emoji_name.clone(),
                    })
                }
            }
            ReactionType::UnicodeEmoji => {
                if !selection.emoji_code.is_empty() {
                    return Ok(Self::unicode_details(
                        &selection.emoji_name,
                        &selection.emoji_code,
                    ));
                }
                self.unicode_by_name
                    .get(&selection.emoji_name)
                    .map(|code| Self::unicode_details(&selection.emoji_name, code))
                    .ok_or_else(|| DomainError::UnknownEmoji {
                        name: selection.emoji_name.clone(),
                    })
            }
        }
    }

    fn details_by_name(&self, emoji_name: &str) -> PortResult<EmojiRenderingDetails> {
        if let Some(emoji) = self
            .realm_id_by_name
            .get(emoji_name)
            .and_then(|id| self.realm_by_id.get(id))
        {
            return Ok(emoji.details());
        }

        if emoji_name == ZULIP_EXTRA_EMOJI_NAME {
            return Ok(Self::zulip_extra_details());
        }

        self.unicode_by_name
            .get(emoji_name)
            .map(|code| Self::unicode_details(emoji_name, code))
            .ok_or_else(|| DomainError::UnknownEmoji {
                name: emoji_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parrot() -> RealmEmoji {
        RealmEmoji {
            id: "42".to_string(),
            name: "party_parrot".to_string(),
            source_url: "/user_avatars/2/emoji/images/42.gif".to_string(),
            still_url: Some("/user_avatars/2/emoji/images/still/42.png".to_string()),
            deactivated: false,
        }
    }

    #[test]
    fn test_builtin_by_name() {
        let catalog = EmojiCatalog::new();
        let details = catalog.details_by_name("bus").unwrap();
        assert_eq!(details.emoji_code, "1f68c");
        assert!(!details.is_image());

        assert!(catalog.details_by_name("no_such_emoji").is_err());
    }

    #[test]
    fn test_unicode_with_code_passes_through() {
        let catalog = EmojiCatalog::new();
        let selection = EmojiSelection::new("rocket", "1f680", ReactionType::UnicodeEmoji);
        let details = catalog.details_for_rendering(&selection).unwrap();
        assert_eq!(details.emoji_name, "rocket");
        assert_eq!(details.emoji_code, "1f680");
    }

    #[test]
    fn test_unicode_without_code_uses_table() {
        let catalog = EmojiCatalog::new();
        let details = catalog
            .details_for_rendering(&EmojiSelection::by_name("office"))
            .unwrap();
        assert_eq!(details.emoji_code, "1f3e2");

        let err = catalog
            .details_for_rendering(&EmojiSelection::by_name("rocket"))
            .unwrap_err();
        assert!(err.is_unknown_emoji());
    }

    #[test]
    fn test_realm_emoji_renders_as_image() {
        let catalog = EmojiCatalog::new().with_realm_emoji(parrot());

        let selection = EmojiSelection::new("party_parrot", "42", ReactionType::RealmEmoji);
        let details = catalog.details_for_rendering(&selection).unwrap();
        assert!(details.is_image());
        assert!(details.is_custom());
        assert_eq!(details.still_url.as_deref(), Some("/user_avatars/2/emoji/images/still/42.png"));

        let by_name = catalog.details_by_name("party_parrot").unwrap();
        assert_eq!(by_name, details);
    }

    #[test]
    fn test_unknown_realm_code() {
        let catalog = EmojiCatalog::new();
        let selection = EmojiSelection::new("party_parrot", "42", ReactionType::RealmEmoji);
        assert!(matches!(
            catalog.details_for_rendering(&selection),
            Err(DomainError::UnknownEmojiCode { .. })
        ));
    }

    #[test]
    fn test_deactivated_realm_emoji() {
        let mut emoji = parrot();
        emoji.deactivated = true;
        let catalog = EmojiCatalog::new().with_realm_emoji(emoji);

        // Not offered by name, but existing statuses keep rendering
        assert!(catalog.details_by_name("party_parrot").is_err());
        let selection = EmojiSelection::new("party_parrot", "42", ReactionType::RealmEmoji);
        assert!(catalog.details_for_rendering(&selection).is_ok());
    }

    #[test]
    fn test_zulip_extra_emoji() {
        let catalog = EmojiCatalog::new();
        let details = catalog.details_by_name("zulip").unwrap();
        assert_eq!(details.reaction_type, ReactionType::ZulipExtraEmoji);
        assert_eq!(details.url.as_deref(), Some(ZULIP_EXTRA_EMOJI_URL));

        let selection = EmojiSelection::new("octopus", "octopus", ReactionType::ZulipExtraEmoji);
        assert!(catalog.details_for_rendering(&selection).is_err());
    }
}
