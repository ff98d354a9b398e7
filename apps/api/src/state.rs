use std::sync::Arc;

use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was configured at startup; every analysis
    /// request then fails before any network call.
    pub llm: Option<Arc<dyn ChatBackend>>,
}
