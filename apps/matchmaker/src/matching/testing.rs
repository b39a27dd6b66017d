//! Deterministic embedders for orchestrator and handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::gemini::GeminiError;
use crate::matching::embedding::{Embedder, EmbeddingError, EmbeddingVector};

type Script = dyn Fn(&str) -> Result<EmbeddingVector, EmbeddingError> + Send + Sync;

/// Answers every `embed` call from a closure and records the texts it saw.
pub(crate) struct ScriptedEmbedder {
    script: Box<Script>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedEmbedder {
    pub(crate) fn new<F>(script: F) -> Self
    where
        F: Fn(&str) -> Result<EmbeddingVector, EmbeddingError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Job texts (recognised by an upper-case `PYTHON` token) map to a unit
    /// vector whose cosine with every other text's vector is exactly `cosine`.
    pub(crate) fn with_cosine(cosine: f64) -> Self {
        Self::new(move |text| {
            if text.contains("PYTHON") {
                Ok(vec![cosine, (1.0 - cosine * cosine).sqrt()].into())
            } else {
                Ok(vec![1.0, 0.0].into())
            }
        })
    }

    /// Fails any text containing `marker` with a provider 503 error.
    pub(crate) fn failing_on(marker: &'static str) -> Self {
        Self::new(move |text| {
            if text.contains(marker) {
                Err(EmbeddingError::Provider(GeminiError::Api {
                    status: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                    message: format!("provider unavailable for {marker}"),
                }))
            } else {
                Ok(vec![1.0, 0.0].into())
            }
        })
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Embedder for ScriptedEmbedder {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        self.calls.lock().unwrap().push(text.to_string());
        (self.script)(text)
    }
}
