//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::upstream::PageRankClient;

/// Read-only state shared across requests. Concurrent lookups are
/// independent; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub ranker: Arc<PageRankClient>,
}
