//! Phone devices endpoint tests.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoomapi::{Delete, ZoomClient, ZoomError};

#[tokio::test]
async fn test_sync_desk_phones_posts_payload() {
    let mock_server = MockServer::start().await;

    let payload = json!({"site_id": "site1"});

    Mock::given(method("POST"))
        .and(path("/phone/devices/sync"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    client.phone_devices.sync_desk_phones(&payload).await.unwrap();
}

#[tokio::test]
async fn test_reboot_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/phone/devices/dev1/reboot"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    client.phone_devices.reboot_desk_phone("dev1").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_assign_and_unassign_extensions() {
    let mock_server = MockServer::start().await;

    let payload = json!({"assignee_extension_ids": ["ext1"]});

    Mock::given(method("POST"))
        .and(path("/phone/devices/dev1/extensions"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/phone/devices/dev1/extensions/ext1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    client
        .phone_devices
        .assign_entities("dev1", &payload)
        .await
        .unwrap();
    client
        .phone_devices
        .unassign_entity("dev1", "ext1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_blank_ids_fail_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();

    let err = client.phone_devices.delete("").await.unwrap_err();
    assert!(matches!(err, ZoomError::InvalidPath(_)), "{err}");

    let err = client
        .phone_devices
        .unassign_entity("dev1", "")
        .await
        .unwrap_err();
    assert!(matches!(err, ZoomError::InvalidPath(_)), "{err}");

    let err = client.phone_devices.delete("..").await.unwrap_err();
    assert!(matches!(err, ZoomError::InvalidPath(_)), "{err}");

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
