//! DTOs for the domain lookup endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for `GET /api/oprank`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Raw, unnormalized domain text.
    #[serde(default)]
    pub domain: Option<String>,
}

/// Successful lookup response: uniform metrics plus the raw upstream entry.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub ok: bool,
    pub provider: &'static str,
    pub domain: String,
    pub metrics: RankMetrics,
    pub raw: Value,
}

/// Reputation metrics extracted from one upstream entry.
///
/// Non-numeric upstream values become `null` rather than failing the
/// request; `status_code` defaults to 200 when absent.
#[derive(Debug, PartialEq, Serialize)]
pub struct RankMetrics {
    pub page_rank_decimal: Option<f64>,
    pub page_rank_integer: Option<i64>,
    pub rank: Option<i64>,
    pub status_code: i64,
}

impl RankMetrics {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            page_rank_decimal: raw
                .get("page_rank_decimal")
                .and_then(Value::as_f64)
                .map(round2),
            page_rank_integer: raw.get("page_rank_integer").and_then(Value::as_i64),
            rank: raw.get("rank").and_then(Value::as_i64),
            status_code: raw
                .get("status_code")
                .and_then(Value::as_i64)
                .unwrap_or(200),
        }
    }
}

/// Rounds to two decimal places, half away from zero on the scaled value.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
