//! HTTP client for the OpenPageRank reputation API.
//!
//! One lookup is one GET request: the domain goes into the `domains[]`
//! query parameter and the credential into the `API-OPR` header. Each call
//! is independent; there are no retries and no caching.

use crate::error::AppError;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

/// Upstream envelope: a `response` array of per-domain result objects.
///
/// Entries are kept as raw JSON because field types vary upstream (ranks
/// occasionally arrive as strings); the DTO layer extracts what is numeric.
#[derive(Debug, Deserialize)]
struct PageRankEnvelope {
    #[serde(default)]
    response: Vec<Value>,
}

/// Client for the OpenPageRank `getPageRank` endpoint.
///
/// The credential is injected at construction rather than read from the
/// environment on each call; a missing credential is reported per lookup
/// as a configuration error.
#[derive(Debug, Clone)]
pub struct PageRankClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl PageRankClient {
    /// Creates a client with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    /// Returns whether an upstream credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Looks up a single normalized domain and returns the raw upstream
    /// entry for it.
    ///
    /// # Errors
    ///
    /// - [`AppError::Configuration`] - no credential configured; no request
    ///   is sent
    /// - [`AppError::Upstream`] - upstream responded with a non-2xx status
    /// - [`AppError::Unavailable`] - no response (timeout or connect failure)
    /// - [`AppError::NotFound`] - upstream has no record for the domain
    /// - [`AppError::Internal`] - any other local fault
    pub async fn lookup(&self, domain: &str) -> Result<Value, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("OPR_API_KEY is not configured"))?;

        tracing::debug!(domain, "Querying OpenPageRank");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("domains[]", domain)])
            .header("API-OPR", api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.json::<Value>().await.unwrap_or(Value::Null);
            tracing::warn!(domain, status = status.as_u16(), "Upstream error response");
            return Err(AppError::upstream(status.as_u16(), payload));
        }

        let envelope: PageRankEnvelope = response.json().await.map_err(|e| {
            AppError::internal(
                format!("Invalid upstream payload: {e}"),
                json!({ "domain": domain }),
            )
        })?;

        let entry = envelope
            .response
            .into_iter()
            .next()
            .ok_or_else(|| not_found(domain))?;

        // OpenPageRank reports unknown domains inside a 200 envelope.
        if entry.get("status_code").and_then(Value::as_i64) == Some(404) {
            return Err(not_found(domain));
        }

        Ok(entry)
    }
}

fn not_found(domain: &str) -> AppError {
    AppError::not_found(
        "No data found for this domain",
        json!({ "domain": domain }),
    )
}

fn map_send_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() || e.is_connect() {
        AppError::unavailable(format!("Upstream service unreachable: {e}"))
    } else {
        AppError::internal(format!("Upstream request failed: {e}"), Value::Null)
    }
}
