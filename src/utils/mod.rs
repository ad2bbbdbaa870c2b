//! Utility components used across the application:
//!
//! - [`domain`] - Domain normalization and hostname validation
//! - [`rate_limit`] - Fixed-window rate limiter with an injected clock

pub mod domain;
pub mod rate_limit;
