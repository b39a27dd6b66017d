//! Match Orchestrator — runs the pipeline and owns all error short-circuiting.
//!
//! Flow: validate records → extract text blobs → embed both sides concurrently →
//!       cosine score → rounded score with interpretation band.
//!
//! Any failure returns immediately; nothing is retried.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::matching::embedding::{Embedder, EmbeddingError, EmbeddingVector};
use crate::matching::fields::{
    extract_text, field_names, FieldSpec, CANDIDATE_FIELDS, JOB_FIELDS,
};
use crate::matching::similarity::{self, Interpretation, ScoringError};

/// Which record of the pair a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Candidate,
    Job,
}

impl Side {
    /// Top-level key of the record in the `/match` request body.
    pub fn request_key(&self) -> &'static str {
        match self {
            Side::Candidate => "candidate_details",
            Side::Job => "job_description",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Side::Candidate => CANDIDATE_FIELDS,
            Side::Job => JOB_FIELDS,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Candidate => f.write_str("candidate"),
            Side::Job => f.write_str("job"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Missing '{}' in JSON payload.", .0.request_key())]
    MissingField(Side),

    #[error("'{}' must be a JSON object.", .0.request_key())]
    InvalidRecord(Side),

    #[error("{}", empty_text_message(*candidate, *job))]
    EmptyExtractedText { candidate: bool, job: bool },

    #[error("Failed to generate {side} embedding: {source}")]
    Embedding {
        side: Side,
        #[source]
        source: EmbeddingError,
    },

    #[error("Failed to score match: {0}")]
    Scoring(#[from] ScoringError),
}

fn empty_text_message(candidate: bool, job: bool) -> String {
    let sides = match (candidate, job) {
        (true, true) => "candidate and job",
        (true, false) => "candidate",
        _ => "job",
    };
    format!(
        "Extracted text for embedding is empty ({sides}). Please ensure relevant fields \
         ({} for job; {} for candidate) are present and contain text in the JSON.",
        field_names(Side::Job.fields()),
        field_names(Side::Candidate.fields()),
    )
}

/// Response body of a successful match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Cosine similarity rounded to 4 decimal places.
    pub match_score: f64,
    pub interpretation: Interpretation,
}

#[derive(Clone)]
pub struct Matchmaker {
    embedder: Arc<dyn Embedder>,
}

impl Matchmaker {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Scores a candidate record against a job record.
    ///
    /// Both records arrive as raw JSON; `None` and `null` count as missing.
    pub async fn run(
        &self,
        candidate: Option<&Value>,
        job: Option<&Value>,
    ) -> Result<MatchResult, MatchError> {
        // Step 1: Validate input
        let candidate = as_record(Side::Candidate, candidate)?;
        let job = as_record(Side::Job, job)?;

        // Step 2: Extract
        let candidate_text = extract_text(candidate, Side::Candidate.fields());
        let job_text = extract_text(job, Side::Job.fields());

        if candidate_text.is_empty() || job_text.is_empty() {
            return Err(MatchError::EmptyExtractedText {
                candidate: candidate_text.is_empty(),
                job: job_text.is_empty(),
            });
        }

        debug!(
            candidate_chars = candidate_text.len(),
            job_chars = job_text.len(),
            "Extracted text for embedding"
        );

        // Step 3: Embed both sides; the candidate error wins if both fail
        let (candidate_vector, job_vector) = tokio::join!(
            self.embed_side(Side::Candidate, &candidate_text),
            self.embed_side(Side::Job, &job_text),
        );
        let candidate_vector = candidate_vector?;
        let job_vector = job_vector?;

        // Step 4: Score
        let similarity = similarity::score(&candidate_vector, &job_vector).map_err(|e| {
            error!(error = %e, "Similarity scoring failed");
            MatchError::Scoring(e)
        })?;

        info!(
            score = similarity.raw,
            interpretation = similarity.interpretation.label(),
            "Match scored"
        );

        // Step 5: Respond
        Ok(MatchResult {
            match_score: similarity.rounded(),
            interpretation: similarity.interpretation,
        })
    }

    async fn embed_side(&self, side: Side, text: &str) -> Result<EmbeddingVector, MatchError> {
        self.embedder.embed(text).await.map_err(|source| {
            error!(side = %side, error = %source, "Embedding request failed");
            MatchError::Embedding { side, source }
        })
    }
}

fn as_record(side: Side, value: Option<&Value>) -> Result<&Map<String, Value>, MatchError> {
    match value {
        None | Some(Value::Null) => Err(MatchError::MissingField(side)),
        Some(Value::Object(map)) if map.is_empty() => Err(MatchError::MissingField(side)),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(MatchError::InvalidRecord(side)),
    }
}
