use std::sync::Arc;

use crate::analysis::extract::TextExtractor;
use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated while serving.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote model used for every analysis. `GeminiClient` in production.
    pub model: Arc<dyn GenerativeModel>,
    pub extractor: Arc<dyn TextExtractor>,
}
