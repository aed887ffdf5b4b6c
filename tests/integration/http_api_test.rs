//! HTTP Webhook Client Tests
//!
//! Exercises `HttpMattermostApi` against the loopback stub:
//! - JSON wire format of the posted body
//! - Response text passthrough, including non-2xx answers
//! - Transport failures surface as `HttpError`

use serde_json::json;

use mattermost_notifier::services::notification::{
    HttpMattermostApi, MattermostApi, MattermostNotificationBody, NotificationError,
};
use mattermost_notifier::services::proxy::HttpClientOptions;

use super::stub_server::{closed_port_url, spawn_webhook_stub};

fn body(text: &str) -> MattermostNotificationBody {
    MattermostNotificationBody {
        username: "ombi".to_string(),
        channel: "requests".to_string(),
        text: text.to_string(),
    }
}

fn api() -> HttpMattermostApi {
    HttpMattermostApi::new(&HttpClientOptions {
        timeout_secs: 5,
        proxy: None,
    })
    .unwrap()
}

#[tokio::test]
async fn test_push_posts_json_body() {
    let (url, server) = spawn_webhook_stub(200, "ok").await;

    let response = api().push(&url, &body("hello")).await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(response, "ok");
    assert!(captured.request_line.starts_with("POST /hooks/stub"));
    assert_eq!(
        captured.body,
        json!({"username": "ombi", "channel": "requests", "text": "hello"})
    );
}

#[tokio::test]
async fn test_push_returns_error_body_text() {
    let (url, server) = spawn_webhook_stub(400, "Unable to parse incoming data").await;

    let response = api().push(&url, &body("hello")).await.unwrap();
    server.await.unwrap();

    assert_eq!(response, "Unable to parse incoming data");
}

#[tokio::test]
async fn test_push_connection_refused() {
    let url = closed_port_url().await;

    let result = api().push(&url, &body("hello")).await;

    assert!(matches!(result, Err(NotificationError::HttpError(_))));
}
