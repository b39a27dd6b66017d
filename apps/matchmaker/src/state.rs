use std::sync::Arc;

use crate::generation::generator::JobDescriptionGenerator;
use crate::matching::matchmaker::Matchmaker;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data; the provider credential lives inside the
/// clients behind these trait objects.
#[derive(Clone)]
pub struct AppState {
    pub matchmaker: Matchmaker,
    /// Pluggable job description generator. Default: `GeminiClient`.
    pub generator: Arc<dyn JobDescriptionGenerator>,
}
