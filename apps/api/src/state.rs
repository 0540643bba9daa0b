use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::profile::store::ProfileStore;
use crate::resume::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable profile persistence. Redis when configured, in-memory otherwise.
    pub profiles: Arc<dyn ProfileStore>,
    pub llm: LlmClient,
    /// Initialized once in `main`.
    pub extractor: TextExtractor,
}
