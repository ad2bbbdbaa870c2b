//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/oprank`  - Domain reputation lookup
//! - `GET /health`      - Health check
//! - `/*`               - Static assets (the lookup UI)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the lookup endpoint serves browser callers
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, lookup_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is served at the root path, falling through from the API
/// routes, so the bundled UI and the endpoint share one origin.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let api_router = Router::new().route("/oprank", get(lookup_handler));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
