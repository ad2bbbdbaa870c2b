//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honored when present (via `dotenvy` in `main`).
//!
//! ## Variables
//!
//! - `OPR_API_KEY` - OpenPageRank credential. Optional at startup: when
//!   absent the service still runs, and each lookup fails with a
//!   configuration error.
//! - `OPR_API_URL` - Upstream endpoint
//!   (default: `https://openpagerank.com/api/v1.0/getPageRank`)
//! - `OPR_TIMEOUT_SECS` - Upstream request timeout (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served at the root path (default: `public`)

use anyhow::Result;
use std::env;

/// Default OpenPageRank endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://openpagerank.com/api/v1.0/getPageRank";

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenPageRank credential, injected into the upstream client at
    /// construction. `None` makes every lookup a configuration error.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = env::var("OPR_API_KEY").ok().filter(|k| !k.is_empty());

        let upstream_url =
            env::var("OPR_API_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let upstream_timeout_secs = env::var("OPR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            api_key,
            upstream_url,
            upstream_timeout_secs,
            listen_addr,
            log_level,
            log_format,
            static_dir,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `upstream_url` is not an HTTP(S) URL
    /// - `upstream_timeout_secs` is outside 1..=300
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://") {
            anyhow::bail!(
                "OPR_API_URL must start with 'http://' or 'https://', got '{}'",
                self.upstream_url
            );
        }

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 300 {
            anyhow::bail!(
                "OPR_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without the credential value).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!(
            "  API key: {}",
            if self.api_key.is_some() {
                "configured"
            } else {
                "NOT CONFIGURED (lookups will fail)"
            }
        );
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
