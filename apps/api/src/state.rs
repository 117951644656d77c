use std::sync::Arc;

use crate::config::Config;
use crate::ner::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable entity recognizer. Constructed once at startup and shared
    /// read-only by all concurrent extraction calls. Default: LexicalRecognizer.
    pub recognizer: Arc<dyn EntityRecognizer>,
}
