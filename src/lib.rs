//! # Domain Rank
//!
//! A small domain reputation lookup service built with Axum. It proxies the
//! OpenPageRank API: the caller supplies a raw domain, the service normalizes
//! it, performs a single upstream lookup, and returns a uniform JSON result.
//!
//! ## Architecture
//!
//! - **Utils** ([`utils`]) - Domain normalization/validation and a
//!   fixed-window rate limiter component
//! - **Upstream** ([`upstream`]) - The OpenPageRank HTTP client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the upstream credential
//! export OPR_API_KEY="your-openpagerank-key"
//!
//! # Start the service
//! cargo run
//!
//! # Look up a domain
//! curl 'http://localhost:3000/api/oprank?domain=example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod error;
pub mod state;
pub mod upstream;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
