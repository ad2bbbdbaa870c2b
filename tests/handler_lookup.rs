mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use httpmock::prelude::*;
use serde_json::{Value, json};
use std::time::Duration;

fn mock_entry(domain: &str) -> Value {
    json!({
        "domain": domain,
        "page_rank_decimal": 4.29,
        "page_rank_integer": 4,
        "rank": 123456,
        "status_code": 200
    })
}

#[tokio::test]
async fn test_lookup_success_mapping() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/getPageRank")
            .query_param("domains[]", "example.com")
            .header("API-OPR", common::TEST_API_KEY);
        then.status(200)
            .json_body(json!({ "response": [mock_entry("example.com")] }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status_ok();
    mock.assert();

    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["provider"], json!("OpenPageRank"));
    assert_eq!(body["domain"], json!("example.com"));
    assert_eq!(body["metrics"]["page_rank_decimal"], json!(4.29));
    assert_eq!(body["metrics"]["page_rank_integer"], json!(4));
    assert_eq!(body["metrics"]["rank"], json!(123456));
    assert_eq!(body["metrics"]["status_code"], json!(200));
    assert_eq!(body["raw"], mock_entry("example.com"));
}

#[tokio::test]
async fn test_lookup_normalizes_input_before_upstream_call() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET)
            .path("/getPageRank")
            .query_param("domains[]", "example.com");
        then.status(200)
            .json_body(json!({ "response": [mock_entry("example.com")] }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "https://WWW.Example.com/path?q=1")
        .await;

    response.assert_status_ok();
    mock.assert();

    let body = response.json::<Value>();
    assert_eq!(body["domain"], json!("example.com"));
}

#[tokio::test]
async fn test_lookup_rounds_decimal_half_up() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200).json_body(json!({
            "response": [{ "domain": "example.com", "page_rank_decimal": 4.2949 }]
        }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["metrics"]["page_rank_decimal"], json!(4.29));
    // Missing numeric fields come back null, status_code defaults to 200.
    assert_eq!(body["metrics"]["page_rank_integer"], json!(null));
    assert_eq!(body["metrics"]["rank"], json!(null));
    assert_eq!(body["metrics"]["status_code"], json!(200));
}

#[tokio::test]
async fn test_lookup_missing_domain_is_rejected_without_upstream_call() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200).json_body(json!({ "response": [] }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/oprank").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["code"], json!("validation_error"));

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "   ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    mock.assert_hits(0);
}

#[tokio::test]
async fn test_lookup_invalid_hostname_is_rejected() {
    let state = common::test_state("http://127.0.0.1:1", Some(common::TEST_API_KEY));
    let server = TestServer::new(common::test_app(state)).unwrap();

    for input in ["not a domain!", "localhost", "example.c"] {
        let response = server
            .get("/api/oprank")
            .add_query_param("domain", input)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["code"], json!("validation_error"));
    }
}

#[tokio::test]
async fn test_lookup_not_found_entry() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200)
            .json_body(json!({ "response": [{ "status_code": 404 }] }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "nonexistent-domain-xyz.com")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["details"]["domain"], json!("nonexistent-domain-xyz.com"));
}

#[tokio::test]
async fn test_lookup_empty_response_array_is_not_found() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200).json_body(json!({ "response": [] }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lookup_missing_credential_skips_upstream() {
    let upstream = MockServer::start();
    let mock = upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200)
            .json_body(json!({ "response": [mock_entry("example.com")] }));
    });

    let state = common::test_state(&upstream.url("/getPageRank"), None);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    mock.assert_hits(0);

    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["code"], json!("configuration_error"));
}

#[tokio::test]
async fn test_lookup_upstream_error_status_is_forwarded() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(429)
            .json_body(json!({ "error": "quota exceeded" }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["code"], json!("upstream_error"));
    assert_eq!(body["details"]["error"], json!("quota exceeded"));
}

#[tokio::test]
async fn test_lookup_upstream_unreachable_is_service_unavailable() {
    // Nothing listens on port 1, so the connection is refused immediately.
    let state = common::test_state("http://127.0.0.1:1/getPageRank", Some(common::TEST_API_KEY));
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["code"], json!("upstream_unavailable"));
}

#[tokio::test]
async fn test_lookup_upstream_timeout_is_service_unavailable() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200)
            .json_body(json!({ "response": [mock_entry("example.com")] }))
            .delay(Duration::from_millis(500));
    });

    let state = common::test_state_with_timeout(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
        Duration::from_millis(100),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["code"], json!("upstream_unavailable"));
}

#[tokio::test]
async fn test_lookup_malformed_upstream_payload_is_internal_error() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200).body("not json at all");
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["code"], json!("internal_error"));
}

#[tokio::test]
async fn test_lookup_domain_falls_back_to_request_domain() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/getPageRank");
        then.status(200).json_body(json!({
            "response": [{ "page_rank_decimal": 1.5, "status_code": 200 }]
        }));
    });

    let state = common::test_state(
        &upstream.url("/getPageRank"),
        Some(common::TEST_API_KEY),
    );
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/oprank")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["domain"], json!("example.com"));
    assert_eq!(body["metrics"]["page_rank_decimal"], json!(1.5));
}
