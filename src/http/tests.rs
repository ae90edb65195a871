//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn default_client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

fn url(server: &MockServer, path: &str) -> String {
    format!("{}{path}", server.uri())
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.username.is_none());
    assert!(config.user_agent.starts_with("twilio-rest/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .basic_auth("AC123", "token")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.username.as_deref(), Some("AC123"));
    assert_eq!(config.password.as_deref(), Some("token"));
}

#[test]
fn test_http_client_config_debug_hides_password() {
    let config = HttpClientConfig::builder()
        .basic_auth("AC123", "super-secret")
        .build();
    let debug_str = format!("{config:?}");
    assert!(debug_str.contains("AC123"));
    assert!(!debug_str.contains("super-secret"));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("PageSize", "10")
        .query("Page", "1")
        .header("X-Request-Id", "abc123")
        .form(vec![("Body".to_string(), "hi".to_string())])
        .timeout(Duration::from_secs(10));

    assert_eq!(
        config.query,
        vec![
            ("PageSize".to_string(), "10".to_string()),
            ("Page".to_string(), "1".to_string()),
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.form.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[tokio::test]
async fn test_http_client_request_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Schemas/id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "DataTaps.TestEventSchema"
        })))
        .mount(&mock_server)
        .await;

    let client = default_client();
    let data = client
        .request_value(
            Method::GET,
            &url(&mock_server, "/v1/Schemas/id"),
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(data["id"], "DataTaps.TestEventSchema");
}

#[tokio::test]
async fn test_http_client_request_value_rejects_non_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = default_client();
    let err = client
        .request_value(Method::GET, &url(&mock_server, "/v1/text"), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(err.is_deserialization());
}

#[tokio::test]
async fn test_http_client_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/secure"))
        .and(basic_auth("AC123", "token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .basic_auth("AC123", "token")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .request(Method::GET, &url(&mock_server, "/v1/secure"), RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_post_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/items"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("FriendlyName=cred&IpAddress=ip"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "IP123"
        })))
        .mount(&mock_server)
        .await;

    let client = default_client();
    let created = client
        .request_value(
            Method::POST,
            &url(&mock_server, "/v1/items"),
            RequestConfig::new().form(vec![
                ("FriendlyName".to_string(), "cred".to_string()),
                ("IpAddress".to_string(), "ip".to_string()),
            ]),
        )
        .await
        .unwrap();

    assert_eq!(created["sid"], "IP123");
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/Messages"))
        .and(query_param("PageSize", "20"))
        .and(query_param("PageToken", "PT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = default_client();
    let response = client
        .request(
            Method::GET,
            &url(&mock_server, "/v1/Messages"),
            RequestConfig::new().query_params(vec![
                ("PageSize".to_string(), "20".to_string()),
                ("PageToken".to_string(), "PT1".to_string()),
            ]),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/data"))
        .and(header("X-Default", "one"))
        .and(header("X-Twilio-Webhook-Enabled", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().header("X-Default", "one").build();

    let client = HttpClient::with_config(config).unwrap();
    let mut headers = crate::types::StringMap::new();
    headers.insert("X-Twilio-Webhook-Enabled".to_string(), "true".to_string());
    let response = client
        .request(
            Method::GET,
            &url(&mock_server, "/v1/data"),
            RequestConfig::new().headers(headers),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_rest_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": 20404,
            "message": "The requested resource /v1/missing was not found",
            "more_info": "https://www.twilio.com/docs/errors/20404",
            "status": 404
        })))
        .mount(&mock_server)
        .await;

    let client = default_client();
    let err = client
        .request(Method::GET, &url(&mock_server, "/v1/missing"), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Rest {
            status: 404,
            code: 20404,
            ..
        }
    ));
}

#[tokio::test]
async fn test_http_client_plain_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = default_client();
    let err = client
        .request_value(Method::GET, &url(&mock_server, "/v1/broken"), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_delete_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/items/IP123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = default_client();
    let response = client
        .request(
            Method::DELETE,
            &url(&mock_server, "/v1/items/IP123"),
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
}

#[test]
fn test_http_client_debug() {
    let client = default_client();
    let debug_str = format!("{:?}", client);
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
