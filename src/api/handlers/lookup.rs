//! Handler for the domain lookup endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use crate::api::dto::lookup::{LookupParams, LookupResponse, RankMetrics};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::domain::{is_valid_domain, normalize_domain};

/// Looks up the reputation of a single domain via OpenPageRank.
///
/// # Endpoint
///
/// `GET /api/oprank?domain=<raw text>`
///
/// The input may be a full URL; it is normalized to a bare hostname before
/// validation and lookup.
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "provider": "OpenPageRank",
///   "domain": "example.com",
///   "metrics": {
///     "page_rank_decimal": 4.29,
///     "page_rank_integer": 4,
///     "rank": 123456,
///     "status_code": 200
///   },
///   "raw": { ... }
/// }
/// ```
///
/// # Errors
///
/// - 400 - missing or invalid domain (no outbound call is made)
/// - 404 - upstream has no record for the domain
/// - 500 - missing credential or internal fault
/// - 502..=599 - upstream error status (forwarded) or upstream unreachable (503)
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResponse>, AppError> {
    let domain = normalize_domain(params.domain.as_deref().unwrap_or(""));

    if domain.is_empty() {
        return Err(AppError::bad_request("domain required", json!({})));
    }
    if !is_valid_domain(&domain) {
        return Err(AppError::bad_request(
            "domain is not a valid hostname",
            json!({ "domain": domain }),
        ));
    }

    let raw = state.ranker.lookup(&domain).await?;

    let metrics = RankMetrics::from_raw(&raw);
    let domain = raw
        .get("domain")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or(domain);

    Ok(Json(LookupResponse {
        ok: true,
        provider: "OpenPageRank",
        domain,
        metrics,
        raw,
    }))
}
