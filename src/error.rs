//! Application error type and its HTTP mapping.
//!
//! Every failure the service can produce is one of the variants below, so
//! callers match on the kind instead of inspecting message strings. The
//! [`IntoResponse`] impl renders the uniform failure body
//! `{"ok": false, "code": ..., "message": ..., "details": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

/// All error kinds produced by the lookup service.
///
/// Each request terminates on the first error; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Empty or malformed domain. Never reaches the upstream call.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Missing upstream credential. Fatal for the call, not retried.
    #[error("{message}")]
    Configuration { message: String },

    /// Upstream has no record for the domain. A legitimate negative result.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Upstream responded with a non-2xx status. Status and payload are
    /// propagated verbatim where possible.
    #[error("Upstream service returned status {status}")]
    Upstream { status: u16, payload: Value },

    /// No response from upstream (timeout or connection failure).
    #[error("{message}")]
    Unavailable { message: String },

    /// Any other local fault.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(status: u16, payload: Value) -> Self {
        Self::Upstream { status, payload }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code, details) = match self {
            AppError::Validation { details, .. } => {
                (StatusCode::BAD_REQUEST, "validation_error", details)
            }
            AppError::Configuration { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                Value::Null,
            ),
            AppError::NotFound { details, .. } => (StatusCode::NOT_FOUND, "not_found", details),
            AppError::Upstream { status, payload } => (
                // Forward the upstream status where it is a valid HTTP
                // error status; anything else degrades to 502.
                StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                "upstream_error",
                payload,
            ),
            AppError::Unavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_unavailable",
                Value::Null,
            ),
            AppError::Internal { details, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                details,
            ),
        };

        let body = ErrorBody {
            ok: false,
            code,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
