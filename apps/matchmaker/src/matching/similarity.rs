//! Similarity Scorer — cosine similarity plus the interpretation bands shown to callers.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::matching::embedding::EmbeddingVector;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot compute cosine similarity of a zero-magnitude vector")]
    ZeroMagnitude,

    #[error("cannot compute cosine similarity: vector magnitude is not finite")]
    NonFiniteMagnitude,
}

/// Discrete verdict for a similarity score. Bands have inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    Excellent,
    Strong,
    Moderate,
    Low,
}

impl Interpretation {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            Interpretation::Excellent
        } else if score >= 0.70 {
            Interpretation::Strong
        } else if score >= 0.50 {
            Interpretation::Moderate
        } else {
            Interpretation::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Excellent => "Excellent Match",
            Interpretation::Strong => "Strong Match",
            Interpretation::Moderate => "Moderate Match",
            Interpretation::Low => "Low Match",
        }
    }
}

impl Serialize for Interpretation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    /// Unrounded cosine similarity; banding is decided on this value.
    pub raw: f64,
    pub interpretation: Interpretation,
}

impl Similarity {
    /// Score rounded to 4 decimal places for display.
    pub fn rounded(&self) -> f64 {
        round_4dp(self.raw)
    }
}

/// Cosine similarity of two equal-length, non-zero vectors.
pub fn cosine_similarity(a: &EmbeddingVector, b: &EmbeddingVector) -> Result<f64, ScoringError> {
    if a.dimensions() != b.dimensions() {
        return Err(ScoringError::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return Err(ScoringError::ZeroMagnitude);
    }
    if !denom.is_finite() {
        return Err(ScoringError::NonFiniteMagnitude);
    }

    let dot: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x * y)
        .sum();

    // Float error can push parallel vectors a hair past ±1
    Ok((dot / denom).clamp(-1.0, 1.0))
}

pub fn score(a: &EmbeddingVector, b: &EmbeddingVector) -> Result<Similarity, ScoringError> {
    let raw = cosine_similarity(a, b)?;
    Ok(Similarity {
        raw,
        interpretation: Interpretation::from_score(raw),
    })
}

fn round_4dp(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
