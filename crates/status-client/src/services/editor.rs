//! Headless state of the "Set status" dialog.
//!
//! The editor tracks what the current user has typed and picked, decides
//! whether the form can be cleared or saved, and on save sends the update and
//! mirrors it into the local store.

use chrono::{DateTime, Local};
use serde::Serialize;
use status_cache::{
    compute_scheduled_end_time, to_wire_seconds, ScheduledEndTimes, SharedStatusStore,
    StatusStore,
};
use status_core::{
    EmojiRenderingDetails, EmojiResolver, EmojiSelection, TimeKey, UpdateStatusRequest, UserId,
    MAX_STATUS_TEXT_LENGTH,
};
use tracing::{debug, instrument, warn};

use super::error::{ServiceError, ServiceResult};
use super::status::StatusService;

/// Shown when the status has no end time
pub const NO_END_TIME_MESSAGE: &str = "Keep status until you remove it.";

/// A one-click status offered by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDefinition {
    pub status_text: &'static str,
    pub emoji_name: &'static str,
    pub expiry: TimeKey,
}

/// Presets offered by default, in display order
pub const DEFAULT_PRESETS: &[PresetDefinition] = &[
    PresetDefinition {
        status_text: "Busy",
        emoji_name: "working_on_it",
        expiry: TimeKey::InOneHour,
    },
    PresetDefinition {
        status_text: "In a meeting",
        emoji_name: "calendar",
        expiry: TimeKey::InOneHour,
    },
    PresetDefinition {
        status_text: "Commuting",
        emoji_name: "bus",
        expiry: TimeKey::InThirtyMinutes,
    },
    PresetDefinition {
        status_text: "Out sick",
        emoji_name: "hurt",
        expiry: TimeKey::Tomorrow,
    },
    PresetDefinition {
        status_text: "Vacationing",
        emoji_name: "palm_tree",
        expiry: TimeKey::Never,
    },
    PresetDefinition {
        status_text: "Working remotely",
        emoji_name: "house",
        expiry: TimeKey::TodayFivePm,
    },
    PresetDefinition {
        status_text: "At the office",
        emoji_name: "office",
        expiry: TimeKey::TodayFivePm,
    },
];

/// A preset with its emoji resolved for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPreset {
    pub status_text: String,
    pub emoji: EmojiRenderingDetails,
    pub expiry: TimeKey,
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing differed from the stored status; no request was sent
    Unchanged,
    /// The server accepted this request and the store was updated
    Saved(UpdateStatusRequest),
}

/// Form state of the status dialog
#[derive(Debug, Clone)]
pub struct StatusEditor {
    user_id: UserId,
    text: String,
    selected_emoji: Option<EmojiSelection>,
    end_time_key: Option<TimeKey>,
    /// Chosen end time in milliseconds
    scheduled_end_time: Option<i64>,
    /// Session end time (seconds) at the moment the dialog opened
    initial_end_time: Option<i64>,
    presets: Vec<StatusPreset>,
}

impl StatusEditor {
    /// Open the dialog for `user_id`, seeded from the store
    pub fn open(store: &StatusStore, user_id: UserId) -> Self {
        let editor = Self {
            user_id,
            text: store
                .get_status_text(user_id)
                .unwrap_or_default()
                .to_string(),
            selected_emoji: store
                .get_status_emoji(user_id)
                .map(|info| info.details.selection()),
            end_time_key: None,
            scheduled_end_time: None,
            initial_end_time: store.get_scheduled_end_time(),
            presets: resolve_presets(store.emoji_resolver()),
        };

        debug!(
            user_id = %user_id,
            has_text = !editor.text.is_empty(),
            has_emoji = editor.selected_emoji.is_some(),
            "Opened status editor"
        );
        editor
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_emoji(&self) -> Option<&EmojiSelection> {
        self.selected_emoji.as_ref()
    }

    pub fn end_time_key(&self) -> Option<TimeKey> {
        self.end_time_key
    }

    /// Chosen end time in milliseconds, if any
    pub fn scheduled_end_time(&self) -> Option<i64> {
        self.scheduled_end_time
    }

    pub fn presets(&self) -> &[StatusPreset] {
        &self.presets
    }

    /// Replace the text input; input beyond the maximum length is dropped
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_STATUS_TEXT_LENGTH).collect();
    }

    /// Replace the text input, rejecting text over the maximum length.
    ///
    /// # Errors
    /// Returns a validation error and keeps the previous text when `text` is
    /// too long
    pub fn try_set_text(&mut self, text: &str) -> ServiceResult<()> {
        let length = text.chars().count();
        if length > MAX_STATUS_TEXT_LENGTH {
            return Err(ServiceError::validation(format!(
                "Status text is {length} characters, at most {MAX_STATUS_TEXT_LENGTH} allowed"
            )));
        }
        self.text = text.to_string();
        Ok(())
    }

    /// Pick an emoji, or `None` to remove it
    pub fn set_emoji(&mut self, selection: Option<EmojiSelection>) {
        self.selected_emoji = selection.filter(|s| !s.emoji_name.is_empty());
    }

    /// Clear the message and the selected emoji
    pub fn clear_message(&mut self) {
        self.text.clear();
        self.selected_emoji = None;
    }

    /// Fill text, emoji, and end time from a preset.
    ///
    /// Returns `false` when no preset has this text.
    pub fn select_preset(&mut self, status_text: &str) -> bool {
        let Some(preset) = self
            .presets
            .iter()
            .find(|p| p.status_text == status_text)
            .cloned()
        else {
            return false;
        };

        self.text = preset.status_text;
        self.selected_emoji = Some(preset.emoji.selection());
        self.select_end_time(preset.expiry, None);
        true
    }

    /// Choose when the status expires, against the local clock
    pub fn select_end_time(&mut self, key: TimeKey, custom_time_selected: Option<i64>) {
        self.apply_end_time(key, &compute_scheduled_end_time(custom_time_selected));
    }

    /// Choose when the status expires from precomputed end times
    pub fn apply_end_time(&mut self, key: TimeKey, end_times: &ScheduledEndTimes) {
        self.end_time_key = Some(key);
        self.scheduled_end_time = end_times.get(key);
    }

    /// Text describing when the status will expire
    pub fn expiry_label(&self) -> String {
        let millis = match self.end_time_key {
            Some(_) => self.scheduled_end_time,
            None => self.initial_end_time.map(|secs| secs.saturating_mul(1000)),
        };

        millis
            .and_then(DateTime::from_timestamp_millis)
            .map_or_else(
                || NO_END_TIME_MESSAGE.to_string(),
                |at| {
                    at.with_timezone(&Local)
                        .format("%b %-d, %-I:%M %p")
                        .to_string()
                },
            )
    }

    /// Whether the clear action has anything to clear
    pub fn can_clear(&self) -> bool {
        !self.text.is_empty() || self.selected_emoji.is_some()
    }

    /// Whether the form differs from what the store holds
    pub fn has_changes(&self, store: &StatusStore) -> bool {
        let old_text = store.get_status_text(self.user_id).unwrap_or_default().trim();
        if old_text != self.text.trim() {
            return true;
        }

        let emoji_changed = match (store.get_status_emoji(self.user_id), &self.selected_emoji) {
            (None, None) => false,
            (Some(old), Some(new)) => !old.same_emoji(new),
            _ => true,
        };
        if emoji_changed {
            return true;
        }

        store.get_scheduled_end_time() != self.end_time_secs()
    }

    /// End time in seconds a submit would send.
    ///
    /// With no choice made the end time held at open is kept.
    fn end_time_secs(&self) -> Option<i64> {
        match self.end_time_key {
            Some(_) => self.scheduled_end_time.map(to_wire_seconds),
            None => self.initial_end_time,
        }
    }

    /// Whether the save action is enabled.
    ///
    /// Once the form becomes savable with no end time chosen, the end time
    /// defaults to "never".
    pub fn can_submit(&mut self, store: &StatusStore) -> bool {
        if self.text.trim().is_empty() && self.selected_emoji.is_none() {
            return false;
        }
        if !self.has_changes(store) {
            return false;
        }

        if self.end_time_key.is_none() {
            self.end_time_key = Some(TimeKey::Never);
            self.scheduled_end_time = None;
        }
        true
    }

    /// The request a submit would send
    pub fn to_request(&self) -> UpdateStatusRequest {
        UpdateStatusRequest::new(
            self.text.trim(),
            self.selected_emoji.as_ref(),
            self.end_time_secs(),
        )
    }

    /// Save the form.
    ///
    /// On success the store is updated through its setters. On failure the
    /// store is left as it was.
    #[instrument(skip(self, store, service), fields(user_id = %self.user_id))]
    pub async fn submit(
        &self,
        store: &SharedStatusStore,
        service: &StatusService,
    ) -> ServiceResult<SubmitOutcome> {
        let changed = self.has_changes(&store.read());
        if !changed {
            debug!("Status unchanged, nothing to send");
            return Ok(SubmitOutcome::Unchanged);
        }

        let request = self.to_request();
        service.server_update_status(&request).await?;

        {
            let mut store = store.write();
            store.set_status_text(self.user_id, &request.status_text);
            store.set_emoji_selection(self.user_id, request.emoji_selection().as_ref());
            store.set_scheduled_end_time(request.scheduled_end_time);
        }

        Ok(SubmitOutcome::Saved(request))
    }
}

fn resolve_presets(resolver: &dyn EmojiResolver) -> Vec<StatusPreset> {
    DEFAULT_PRESETS
        .iter()
        .filter_map(|preset| match resolver.details_by_name(preset.emoji_name) {
            Ok(emoji) => Some(StatusPreset {
                status_text: preset.status_text.to_string(),
                emoji,
                expiry: preset.expiry,
            }),
            Err(e) => {
                warn!(preset = preset.status_text, error = %e, "Skipping preset");
                None
            }
        })
        .collect()
}
