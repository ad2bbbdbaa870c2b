#![allow(dead_code)]

use axum::{Router, routing::get};
use domain_rank::api::handlers::{health_handler, lookup_handler};
use domain_rank::state::AppState;
use domain_rank::upstream::PageRankClient;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_state(endpoint: &str, api_key: Option<&str>) -> AppState {
    test_state_with_timeout(endpoint, api_key, Duration::from_secs(2))
}

pub fn test_state_with_timeout(
    endpoint: &str,
    api_key: Option<&str>,
    timeout: Duration,
) -> AppState {
    let ranker = PageRankClient::new(
        endpoint.to_string(),
        api_key.map(str::to_owned),
        timeout,
    )
    .unwrap();

    AppState {
        ranker: Arc::new(ranker),
    }
}

pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/api/oprank", get(lookup_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
