//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: PlaysTv client → HTTP requests →
//! assembled results, against a wiremock backend.

use playstv::{ClientConfig, Error, PlaysTv, SearchFilters, SearchOptions};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PlaysTv {
    PlaysTv::with_config(ClientConfig::new("it-app", "it-key").base_url(server.uri())).unwrap()
}

/// Mount one page of a synthetic 110-video result set
async fn mount_search_page(server: &MockServer, page: u64, total: u64) {
    let start = page * 50;
    let len = 50.min(total.saturating_sub(start));
    let items: Vec<_> = (start..start + len)
        .map(|i| json!({"id": format!("v{i}"), "title": format!("Video {i}")}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .and(query_param("page", page.to_string()))
        .and(query_param("appid", "it-app"))
        .and(query_param("appkey", "it-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"total_results": total, "items": items}
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Auth and User Lookup
// ============================================================================

#[tokio::test]
async fn test_verify_returns_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .and(query_param("appid", "it-app"))
        .and(query_param("appkey", "it-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"valid": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client.verify().await.unwrap();
    assert_eq!(content["valid"], true);
}

#[tokio::test]
async fn test_user_lookup_returns_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"handle": "alice", "followers": 3}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user = client.user("alice").await.unwrap();
    assert_eq!(user["handle"], "alice");
    assert_eq!(user["followers"], 3);
}

#[tokio::test]
async fn test_unknown_user_surfaces_404_with_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.user("nobody").await.unwrap_err();
    match err {
        Error::HttpStatus {
            status,
            endpoint,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(endpoint, "/users/nobody");
            assert_eq!(body, "no such user");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Paginated Search
// ============================================================================

#[tokio::test]
async fn test_search_fans_out_and_assembles_in_page_order() {
    // count = 120 of 110 available: page 0 sequentially, pages 1 and 2
    // concurrently, 110 items back in backend order.
    let server = MockServer::start().await;
    for page in 0..3 {
        mount_search_page(&server, page, 110).await;
    }

    let client = client_for(&server);
    let filters = SearchFilters::new().game_id("g1");
    let videos = client
        .search_videos(&filters, SearchOptions::new().count(120))
        .await
        .unwrap();

    assert_eq!(videos.len(), 110);
    assert_eq!(videos[0]["id"], "v0");
    assert_eq!(videos[49]["id"], "v49");
    assert_eq!(videos[50]["id"], "v50");
    assert_eq!(videos[109]["id"], "v109");

    // expect(1) on every mounted page verifies no page was fetched twice
    // and page 3 was never requested.
    server.verify().await;
}

#[tokio::test]
async fn test_search_single_page_when_count_fits() {
    let server = MockServer::start().await;
    mount_search_page(&server, 0, 110).await;

    let client = client_for(&server);
    let filters = SearchFilters::new().hashtags(["fun", "fail"]);
    let videos = client
        .search_videos(&filters, SearchOptions::new().count(30))
        .await
        .unwrap();

    assert_eq!(videos.len(), 30);
    server.verify().await;
}

#[tokio::test]
async fn test_search_serializes_filters_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .and(query_param("limit", "50"))
        .and(query_param("sort", "recent"))
        .and(query_param("sortdir", "desc"))
        .and(query_param("gameId", "g1"))
        .and(query_param("hashtags", "fun,fail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": {"total_results": 0, "items": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filters = SearchFilters::new().game_id("g1").hashtags(["fun", "fail"]);
    let videos = client
        .search_videos(&filters, SearchOptions::new())
        .await
        .unwrap();

    assert!(videos.is_empty());
    server.verify().await;
}

#[tokio::test]
async fn test_search_fan_out_failure_fails_the_whole_call() {
    let server = MockServer::start().await;
    mount_search_page(&server, 0, 150).await;
    mount_search_page(&server, 1, 150).await;

    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filters = SearchFilters::new().game_id("g1");
    let err = client
        .search_videos(&filters, SearchOptions::new().count(150))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_search_empty_filters_never_touches_the_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the search with
    // an HttpStatus error instead of the expected usage error.

    let client = client_for(&server);
    let err = client
        .search_videos(&SearchFilters::new(), SearchOptions::new())
        .await
        .unwrap_err();

    assert!(err.is_usage());
    assert!(server.received_requests().await.unwrap().is_empty());
}
