//! Notifier Integration Tests
//!
//! Wires `MattermostNotification` to a real `ConfigService` (temp config
//! file) and `HttpMattermostApi` (loopback stub):
//! - Rendered text reaches the webhook with the configured username/channel
//! - Rejections and transport failures never escape `notify`
//! - Disabled channels and unknown kinds behave as documented

use std::fs;
use std::sync::Arc;

use mattermost_notifier::services::notification::HttpMattermostApi;
use mattermost_notifier::services::proxy::HttpClientOptions;
use mattermost_notifier::{
    ConfigService, MattermostNotification, Notification, NotificationError, NotificationModel,
    NotificationType, NotifyOutcome, PushOutcome,
};

use super::stub_server::{closed_port_url, spawn_webhook_stub};

// ============================================================================
// Helpers
// ============================================================================

fn write_config(dir: &tempfile::TempDir, enabled: bool, webhook_url: &str) -> ConfigService {
    let path = dir.path().join("config.json");
    let config = serde_json::json!({
        "mattermost": {
            "enabled": enabled,
            "webhookUrl": webhook_url,
            "username": "ombi",
            "channel": "requests"
        },
        "http": { "timeout_secs": 5 }
    });
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    ConfigService::open(&path).unwrap()
}

fn notifier(config: ConfigService) -> MattermostNotification {
    let api = HttpMattermostApi::new(&HttpClientOptions {
        timeout_secs: 5,
        proxy: None,
    })
    .unwrap();
    MattermostNotification::new(Arc::new(api), Arc::new(config))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_issue_delivered_end_to_end() {
    let (url, server) = spawn_webhook_stub(200, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let n = notifier(write_config(&dir, true, &url));

    let model = NotificationModel::new(NotificationType::Issue, "Inception", "bob")
        .with_body("subtitles out of sync");
    let outcome = n.notify(&model).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(outcome, NotifyOutcome::Pushed(PushOutcome::Delivered));
    assert_eq!(captured.body["username"], "ombi");
    assert_eq!(captured.body["channel"], "requests");
    assert_eq!(
        captured.body["text"],
        "A new issue: subtitles out of sync has been reported by user: bob for the title: Inception"
    );
}

#[tokio::test]
async fn test_fault_queue_delivered_end_to_end() {
    let (url, server) = spawn_webhook_stub(200, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let n = notifier(write_config(&dir, true, &url));

    let model = NotificationModel::new(NotificationType::FaultQueueAdd, "Dune", "carol");
    n.notify(&model).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(
        captured.body["text"],
        "Hello! The user 'carol' has requested Dune but it could not be added. This has been added into the requests queue and will keep retrying"
    );
}

#[tokio::test]
async fn test_rejected_response_returns_normally() {
    let (url, server) = spawn_webhook_stub(500, "channel not found").await;
    let dir = tempfile::tempdir().unwrap();
    let n = notifier(write_config(&dir, true, &url));

    let outcome = n.notify(&NotificationModel::test()).await.unwrap();
    server.await.unwrap();

    assert_eq!(
        outcome,
        NotifyOutcome::Pushed(PushOutcome::Rejected("channel not found".to_string()))
    );
}

#[tokio::test]
async fn test_unreachable_webhook_returns_normally() {
    let url = closed_port_url().await;
    let dir = tempfile::tempdir().unwrap();
    let n = notifier(write_config(&dir, true, &url));

    let outcome = n.notify(&NotificationModel::test()).await.unwrap();

    assert!(matches!(
        outcome,
        NotifyOutcome::Pushed(PushOutcome::Failed(_))
    ));
}

#[tokio::test]
async fn test_disabled_config_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens here; a push attempt would show up as Failed.
    let url = closed_port_url().await;
    let n = notifier(write_config(&dir, false, &url));

    let model = NotificationModel::new(NotificationType::NewRequest, "Inception", "alice");
    let outcome = n.notify(&model).await.unwrap();

    assert!(matches!(outcome, NotifyOutcome::Skipped(_)));
}

#[tokio::test]
async fn test_request_approved_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let url = closed_port_url().await;
    let n = notifier(write_config(&dir, true, &url));

    let model = NotificationModel::new(NotificationType::RequestApproved, "Inception", "alice");
    let outcome = n.notify(&model).await.unwrap();

    assert_eq!(
        outcome,
        NotifyOutcome::Unhandled(NotificationType::RequestApproved)
    );
}

#[tokio::test]
async fn test_unknown_kind_from_json_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let url = closed_port_url().await;
    let n = notifier(write_config(&dir, true, &url));

    let model: NotificationModel = serde_json::from_str(
        r#"{"notification_type":"Newsletter","title":"Dune","user":"carol"}"#,
    )
    .unwrap();
    let result = n.notify(&model).await;

    assert!(matches!(result, Err(NotificationError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_concurrent_notifies_are_independent() {
    let (url_a, server_a) = spawn_webhook_stub(200, "ok").await;
    let (url_b, server_b) = spawn_webhook_stub(200, "ok").await;
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let a = notifier(write_config(&dir_a, true, &url_a));
    let b = notifier(write_config(&dir_b, true, &url_b));

    let model_a = NotificationModel::new(NotificationType::NewRequest, "Alien", "ripley");
    let model_b = NotificationModel::new(NotificationType::NewRequest, "Heat", "neil");
    let (ra, rb) = tokio::join!(a.notify(&model_a), b.notify(&model_b));

    assert_eq!(ra.unwrap(), NotifyOutcome::Pushed(PushOutcome::Delivered));
    assert_eq!(rb.unwrap(), NotifyOutcome::Pushed(PushOutcome::Delivered));
    assert_eq!(
        server_a.await.unwrap().body["text"],
        "Alien has been requested by user: ripley"
    );
    assert_eq!(
        server_b.await.unwrap().body["text"],
        "Heat has been requested by user: neil"
    );
}
