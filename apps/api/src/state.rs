use std::sync::Arc;

use crate::analysis::analyzer::AtsAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable once built; shared by every in-flight analysis.
    pub analyzer: Arc<AtsAnalyzer>,
}

#[cfg(test)]
impl AppState {
    /// State backed by the built-in reference tables.
    pub fn with_defaults() -> Self {
        Self {
            analyzer: Arc::new(AtsAnalyzer::default()),
        }
    }
}
