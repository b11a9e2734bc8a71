//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::new().unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.user_agent.starts_with("ghload/"));
    assert!(matches!(config.auth, AuthConfig::None));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("test-agent/1.0")
        .auth(AuthConfig::basic("octocat", "t0k3n"))
        .build();

    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(matches!(config.auth, AuthConfig::Basic(_)));
}

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user: serde_json::Value = client()
        .get_json(&format!("{}/users/octocat", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(user["login"], "octocat");
}

#[tokio::test]
async fn test_get_page_keeps_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", "<https://example.com/items?page=2>; rel=\"next\"")
                .set_body_json(json!([1, 2, 3])),
        )
        .mount(&mock_server)
        .await;

    let page: Page<u32> = client()
        .get_page(&format!("{}/items", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(page.items, vec![1, 2, 3]);
    assert!(page.headers.contains_key("link"));
}

#[tokio::test]
async fn test_status_error_includes_status_line_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/nope/nope/issues"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\":\"Not Found\"}"))
        .mount(&mock_server)
        .await;

    let err = client()
        .get(&format!("{}/repos/nope/nope/issues", mock_server.uri()))
        .await
        .unwrap_err();

    match &err {
        Error::HttpStatus { code, status, body } => {
            assert_eq!(*code, 404);
            assert_eq!(status, "404 Not Found");
            assert_eq!(body, "{\"message\":\"Not Found\"}");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
    assert!(err.to_string().contains("404 Not Found"));
}

#[tokio::test]
async fn test_status_error_body_is_truncated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(10_000)))
        .mount(&mock_server)
        .await;

    let err = client()
        .get(&format!("{}/big", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { code, body, .. } => {
            assert_eq!(code, 500);
            assert_eq!(body.len(), MAX_ERROR_BODY);
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_redirect_class_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-modified"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&mock_server)
        .await;

    let err = client()
        .get(&format!("{}/not-modified", mock_server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(304));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": 1,"))
        .mount(&mock_server)
        .await;

    let err = client()
        .get_json::<serde_json::Value>(&format!("{}/broken", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_shape_mismatch_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&mock_server)
        .await;

    let err = client()
        .get_page::<u32>(&format!("{}/object", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_connection_error_is_http_error() {
    // Reserve a port, then close it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = client()
        .get(&format!("http://127.0.0.1:{port}/unreachable"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_auth_header_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notifications"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .auth(AuthConfig::basic("octocat", "t0k3n"))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let page: Page<serde_json::Value> = client
        .get_page(&format!("{}/notifications", mock_server.uri()))
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_auth_header_omitted_without_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    client()
        .get(&format!("{}/notifications", mock_server.uri()))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert!(requests[0].headers.get("user-agent").is_some());
}
