//! Test fixtures and data generators
//!
//! Provides reusable configs, snapshots, and events for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::{json, Value};
use status_common::AppConfig;
use status_core::StatusSnapshot;

pub const TEST_EMAIL: &str = "iago@example.com";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USER_ID: i64 = 11;

/// Counter for unique event ids
static EVENT_COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique event id
pub fn next_event_id() -> i64 {
    EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Client configuration pointing at `base_url`
pub fn test_config(base_url: &str) -> anyhow::Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("STATUS_SERVER_URL", base_url.to_string()),
        ("STATUS_EMAIL", TEST_EMAIL.to_string()),
        ("STATUS_API_KEY", TEST_API_KEY.to_string()),
        ("STATUS_USER_ID", TEST_USER_ID.to_string()),
        ("STATUS_HTTP_TIMEOUT_SECS", "5".to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Snapshot with a text+emoji user, a text-only user, and an emoji-only user
pub fn sample_snapshot() -> StatusSnapshot {
    serde_json::from_value(json!({
        "user_status": {
            "11": {
                "status_text": "Working remotely",
                "emoji_name": "house",
                "emoji_code": "1f3e0",
                "reaction_type": "unicode_emoji",
                "scheduled_end_time": 1_700_000_000,
            },
            "12": {"status_text": "On call", "away": true},
            "13": {"emoji_name": "palm_tree", "emoji_code": "1f334"},
        }
    }))
    .expect("sample snapshot is valid")
}

/// A `user_status` event for `user_id` with the given fields merged in
pub fn status_event(user_id: i64, fields: Value) -> Value {
    let mut event = json!({
        "id": next_event_id(),
        "type": "user_status",
        "user_id": user_id,
    });
    if let (Some(event), Value::Object(fields)) = (event.as_object_mut(), fields) {
        event.extend(fields);
    }
    event
}
