//! Lazy pagination tests.
//!
//! Uses wiremock to serve multi-page list responses and counts the requests
//! each consumption pattern triggers.

use futures::{StreamExt, TryStreamExt};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoomapi::{
    List, Params, Resource, SessionOptions, ZoomClient, ZoomError,
};

/// Page 1: 2 items + "t2"; page 2: 1 item + "t3"; page 3: 1 item, no token.
async fn mount_three_pages(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .and(query_param_is_missing("next_page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{"id": "a"}, {"id": "b"}],
            "next_page_token": "t2"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .and(query_param("next_page_token", "t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{"id": "c"}],
            "next_page_token": "t3"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .and(query_param("next_page_token", "t3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{"id": "d"}]
        })))
        .mount(mock_server)
        .await;
}

async fn request_count(mock_server: &MockServer) -> usize {
    mock_server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn test_three_pages_yield_items_in_order() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let sites: Vec<_> = client
        .phone_sites
        .list(Params::new())
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<_> = sites.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert_eq!(request_count(&mock_server).await, 3);
}

#[tokio::test]
async fn test_stopping_early_issues_one_request() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let mut sites = client.phone_sites.list(Params::new());

    let first = sites.next().await.unwrap().unwrap();
    assert_eq!(first["id"], "a");
    drop(sites);

    assert_eq!(request_count(&mock_server).await, 1);
}

#[tokio::test]
async fn test_next_page_waits_until_buffer_is_drained() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let mut sites = client.phone_sites.list(Params::new());

    sites.next().await.unwrap().unwrap();
    sites.next().await.unwrap().unwrap();
    assert_eq!(request_count(&mock_server).await, 1);

    let third = sites.next().await.unwrap().unwrap();
    assert_eq!(third["id"], "c");
    assert_eq!(request_count(&mock_server).await, 2);
}

#[tokio::test]
async fn test_nothing_is_requested_before_polling() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let sites = client.phone_sites.list(Params::new());
    drop(sites);

    assert_eq!(request_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_caller_params_are_kept_on_every_page() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let params = Params::new().with("page_size", 2);
    let _: Vec<_> = client.phone_sites.list(params).try_collect().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let queries: Vec<_> = requests.iter().map(|r| r.url.query().unwrap_or("")).collect();
    assert_eq!(
        queries,
        vec![
            "page_size=2",
            "page_size=2&next_page_token=t2",
            "page_size=2&next_page_token=t3",
        ]
    );
}

#[tokio::test]
async fn test_empty_token_ends_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phone/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "devices": [{"id": "d1"}],
            "next_page_token": "",
            "total_records": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let devices = client.phone_devices.list_all(Params::new()).await.unwrap();
    assert_eq!(devices.len(), 1);
}

#[tokio::test]
async fn test_empty_page_with_token_moves_on() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phone/common_areas"))
        .and(query_param_is_missing("next_page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "common_areas": [],
            "next_page_token": "more"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/phone/common_areas"))
        .and(query_param("next_page_token", "more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "common_areas": [{"id": "ca1"}]
        })))
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let areas = client.phone_common_areas.list_all(Params::new()).await.unwrap();
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0]["id"], "ca1");
}

#[tokio::test]
async fn test_fault_mid_pagination_ends_stream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .and(query_param_is_missing("next_page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{"id": "a"}, {"id": "b"}],
            "next_page_token": "t2"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .and(query_param("next_page_token", "t2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&mock_server)
        .await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let results: Vec<_> = client.phone_sites.list(Params::new()).collect().await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["id"], "a");
    assert_eq!(results[1].as_ref().unwrap()["id"], "b");
    let err = results[2].as_ref().unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(request_count(&mock_server).await, 2);
}

#[tokio::test]
async fn test_page_limit_stops_repeating_token() {
    let mock_server = MockServer::start().await;

    // Misbehaving API: always hands back the same token.
    Mock::given(method("GET"))
        .and(path("/phone/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sites": [{"id": "loop"}],
            "next_page_token": "again"
        })))
        .mount(&mock_server)
        .await;

    let options = SessionOptions {
        max_pages: Some(3),
        ..Default::default()
    };
    let client = ZoomClient::with_options("test-token", &mock_server.uri(), options).unwrap();
    let results: Vec<_> = client.phone_sites.list(Params::new()).collect().await;

    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert!(matches!(
        results[3],
        Err(ZoomError::PageLimitExceeded { max_pages: 3 })
    ));
    assert_eq!(request_count(&mock_server).await, 3);
}

#[tokio::test]
async fn test_get_page_returns_single_page() {
    let mock_server = MockServer::start().await;
    mount_three_pages(&mock_server).await;

    let client = ZoomClient::new("test-token", &mock_server.uri(), true).unwrap();
    let endpoint = client.phone_sites.endpoint();
    let params = Params::new().with("next_page_token", "t2");
    let page = endpoint
        .get_page::<zoomapi::JsonObject>(endpoint.url("").unwrap(), "sites", &params)
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.next_page_token.as_deref(), Some("t3"));
    assert_eq!(request_count(&mock_server).await, 1);
}
