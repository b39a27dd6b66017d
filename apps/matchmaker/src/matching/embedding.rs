//! Embedding Client — turns a text blob into a vector via a remote provider.
//!
//! `AppState` holds an `Arc<dyn Embedder>`; production wires in `GeminiClient`,
//! tests inject deterministic fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::gemini::{GeminiClient, GeminiError};

/// A provider-produced embedding. Immutable once obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector(Vec<f64>);

impl EmbeddingVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

impl From<Vec<f64>> for EmbeddingVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error(transparent)]
    Provider(#[from] GeminiError),

    #[error("provider response is missing embedding.values")]
    MissingVector,
}

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError>;
}

#[async_trait]
impl Embedder for GeminiClient {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        let values = self
            .embed_content(text)
            .await?
            .into_values()
            .filter(|values| !values.is_empty())
            .ok_or(EmbeddingError::MissingVector)?;

        Ok(EmbeddingVector::from(values))
    }
}
