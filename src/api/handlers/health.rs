//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always responds 200; a missing upstream credential is reported as
/// `degraded` rather than failing the probe, since the service itself is up.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let credential = if state.ranker.has_credential() {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("OPR_API_KEY is not configured".to_string()),
        }
    };

    let status = if credential.status == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream_credential: credential,
        },
    })
}
