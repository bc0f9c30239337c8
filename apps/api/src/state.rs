use std::sync::Arc;

use crate::catalog::taxonomy::GiftTaxonomy;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn CompletionClient>,
    /// Read-only gift taxonomy, built once at startup.
    pub taxonomy: Arc<GiftTaxonomy>,
}
