//! Status client integration tests
//!
//! Each test starts a local stub server and drives the real HTTP transport
//! against it.
//!
//! Run with: cargo test -p integration-tests --test status_client_tests

use axum::http::{Method, StatusCode};
use integration_tests::{
    error_body, sample_snapshot, single_request, status_event, test_config, StubServer,
    TEST_API_KEY, TEST_EMAIL, TEST_USER_ID,
};
use serde_json::json;
use status_cache::to_wire_seconds;
use status_client::{ClientContext, HttpTransport, ServiceError, StatusService, SubmitOutcome};
use status_core::{
    EmojiSelection, ReactionType, StatusTransport, TimeKey, UpdateSettingsRequest,
    UpdateStatusRequest, UserId,
};
use std::sync::Arc;

async fn setup() -> (StubServer, ClientContext) {
    let server = StubServer::start().await.expect("Failed to start stub");
    let config = test_config(&server.base_url()).unwrap();
    let ctx = ClientContext::from_config(&config).unwrap();
    (server, ctx)
}

// ============================================================================
// Transport Tests
// ============================================================================

#[tokio::test]
async fn test_update_status_posts_json_body() {
    let server = StubServer::start().await.unwrap();
    let config = test_config(&server.base_url()).unwrap();
    let transport = HttpTransport::from_config(&config).unwrap();

    let emoji = EmojiSelection::new("bus", "1f68c", ReactionType::UnicodeEmoji);
    let request = UpdateStatusRequest::new("Commuting", Some(&emoji), Some(1_700_001_800));
    transport.update_status(&request).await.unwrap();

    let received = single_request(&server).unwrap();
    assert_eq!(received.method, Method::POST);
    assert_eq!(received.path, "/json/users/me/status");
    assert_eq!(
        received.credentials.as_deref(),
        Some(format!("{TEST_EMAIL}:{TEST_API_KEY}").as_str())
    );
    assert_eq!(received.body["status_text"], "Commuting");
    assert_eq!(received.body["emoji_name"], "bus");
    assert_eq!(received.body["emoji_code"], "1f68c");
    assert_eq!(received.body["reaction_type"], "unicode_emoji");
    assert_eq!(received.body["scheduled_end_time"], 1_700_001_800);
}

#[tokio::test]
async fn test_update_status_omits_absent_fields() {
    let server = StubServer::start().await.unwrap();
    let config = test_config(&server.base_url()).unwrap();
    let transport = HttpTransport::from_config(&config).unwrap();

    transport
        .update_status(&UpdateStatusRequest::new("", None, None))
        .await
        .unwrap();

    let received = single_request(&server).unwrap();
    assert_eq!(received.body["status_text"], "");
    assert_eq!(received.body["emoji_name"], "");
    assert!(received.body.get("reaction_type").is_none());
    assert!(received.body.get("scheduled_end_time").is_none());
}

#[tokio::test]
async fn test_invisible_mode_patches_settings() {
    let (server, ctx) = setup().await;

    ctx.service().server_invisible_mode_on().await.unwrap();
    ctx.service().server_invisible_mode_off().await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == Method::PATCH));
    assert!(requests.iter().all(|r| r.path == "/json/settings"));
    assert_eq!(requests[0].body, json!({"presence_enabled": false}));
    assert_eq!(requests[1].body, json!({"presence_enabled": true}));
}

#[tokio::test]
async fn test_server_error_message_is_reported() {
    let server = StubServer::start().await.unwrap();
    server.fail_with(
        StatusCode::BAD_REQUEST,
        error_body("Emoji 'nope' does not exist", "BAD_REQUEST"),
    );
    let config = test_config(&server.base_url()).unwrap();
    let transport: Arc<dyn StatusTransport> = Arc::new(HttpTransport::from_config(&config).unwrap());
    let service = StatusService::new(transport);

    let err = service
        .server_update_status(&UpdateStatusRequest::new("Busy", None, None))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), Some(400));
    assert!(err.to_string().contains("Emoji 'nope' does not exist"));
}

#[tokio::test]
async fn test_non_json_error_uses_reason_phrase() {
    let server = StubServer::start().await.unwrap();
    server.fail_with_text(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
    let config = test_config(&server.base_url()).unwrap();
    let transport = HttpTransport::from_config(&config).unwrap();

    let err = transport
        .update_settings(&UpdateSettingsRequest::invisible())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err.to_string().contains("Bad Gateway"));
}

// ============================================================================
// Editor Flow Tests
// ============================================================================

#[tokio::test]
async fn test_preset_submit_round_trip() {
    let (server, ctx) = setup().await;

    let mut editor = ctx.editor();
    assert!(editor.select_preset("Commuting"));
    assert!(editor.can_submit(&ctx.store().read()));

    let outcome = editor.submit(ctx.store(), ctx.service()).await.unwrap();
    let SubmitOutcome::Saved(request) = outcome else {
        panic!("expected a saved status");
    };

    let expected_end = editor.scheduled_end_time().map(to_wire_seconds);
    assert_eq!(request.scheduled_end_time, expected_end);

    let received = single_request(&server).unwrap();
    assert_eq!(received.body["status_text"], "Commuting");
    assert_eq!(received.body["emoji_name"], "bus");
    assert_eq!(received.body["scheduled_end_time"], expected_end.unwrap());

    let me = UserId::new(TEST_USER_ID);
    let store = ctx.store().read();
    assert_eq!(store.get_status_text(me), Some("Commuting"));
    assert_eq!(store.get_status_emoji(me).unwrap().emoji_name(), "bus");
    assert_eq!(store.get_scheduled_end_time(), expected_end);
}

#[tokio::test]
async fn test_unchanged_form_sends_nothing() {
    let (server, ctx) = setup().await;
    ctx.initialize(&sample_snapshot());

    let mut editor = ctx.editor();
    assert_eq!(editor.text(), "Working remotely");
    assert!(!editor.can_submit(&ctx.store().read()));

    let outcome = editor.submit(ctx.store(), ctx.service()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Unchanged);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_unchanged_form_keeps_stored_expiry() {
    let (server, ctx) = setup().await;
    let me = UserId::new(TEST_USER_ID);
    {
        let mut store = ctx.store().write();
        store.set_status_text(me, "Busy");
        store.set_scheduled_end_time(Some(1_700_000_000));
    }

    let mut editor = ctx.editor();
    assert!(!editor.can_submit(&ctx.store().read()));

    let outcome = editor.submit(ctx.store(), ctx.service()).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Unchanged);
    assert!(server.requests().is_empty());
    assert_eq!(ctx.store().read().get_scheduled_end_time(), Some(1_700_000_000));
}

#[tokio::test]
async fn test_rejected_submit_keeps_local_state() {
    let (server, ctx) = setup().await;
    ctx.initialize(&sample_snapshot());
    server.fail_with(
        StatusCode::BAD_REQUEST,
        error_body("Invalid reaction type", "BAD_REQUEST"),
    );

    let mut editor = ctx.editor();
    editor.set_text("Out to lunch");
    editor.select_end_time(TimeKey::InOneHour, None);

    let err = editor.submit(ctx.store(), ctx.service()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport { status: Some(400), .. }));

    let me = UserId::new(TEST_USER_ID);
    let store = ctx.store().read();
    assert_eq!(store.get_status_text(me), Some("Working remotely"));
    assert_eq!(store.get_scheduled_end_time(), None);
}

// ============================================================================
// Inbound Event Tests
// ============================================================================

#[tokio::test]
async fn test_snapshot_then_events() {
    let (_server, ctx) = setup().await;
    ctx.initialize(&sample_snapshot());

    {
        let store = ctx.store().read();
        assert!(store.get_status_emoji(UserId::new(12)).is_none());
        assert_eq!(store.get_status_text(UserId::new(12)), Some("On call"));
        assert!(store.get_status_text(UserId::new(13)).is_none());
        assert_eq!(
            store.get_status_emoji(UserId::new(13)).unwrap().emoji_name(),
            "palm_tree"
        );
        // User 13 is processed last and carries no end time
        assert_eq!(store.get_scheduled_end_time(), None);
    }

    ctx.dispatch_event(&status_event(12, json!({"status_text": ""})))
        .unwrap();
    ctx.dispatch_event(&status_event(
        13,
        json!({"emoji_name": "", "emoji_code": "", "reaction_type": "unicode_emoji"}),
    ))
    .unwrap();

    let bad = json!({"id": 99, "type": "realm_user", "user_id": 11, "status_text": ""});
    assert!(ctx.dispatch_event(&bad).is_err());

    let store = ctx.store().read();
    assert!(!store.has_status(UserId::new(12)));
    assert!(!store.has_status(UserId::new(13)));
    assert_eq!(
        store.get_status_text(UserId::new(TEST_USER_ID)),
        Some("Working remotely")
    );
}

#[tokio::test]
async fn test_spawned_update_applies_on_success() {
    let (server, ctx) = setup().await;
    let me = ctx.current_user_id();
    let request = UpdateStatusRequest::new("Vacationing", None, None);

    let store = ctx.store().clone();
    let applied = request.clone();
    ctx.service()
        .spawn_update_status(request, move || {
            store.write().set_status_text(me, &applied.status_text);
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(server.requests().len(), 1);
    assert_eq!(ctx.store().read().get_status_text(me), Some("Vacationing"));
}
