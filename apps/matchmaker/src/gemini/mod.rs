/// Gemini Client — the single point of entry for all Gemini API calls.
///
/// Embedding and text generation both go through `GeminiClient`; no other
/// module builds provider requests or sees the API key.
///
/// Every call is a single attempt bounded by the configured timeout.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[cfg(test)]
pub(crate) mod stub;

/// Embedding model. Scores are only comparable across vectors from the same model.
pub const EMBEDDING_MODEL: &str = "gemini-embedding-001";
/// Model used to draft job descriptions.
pub const GENERATION_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";
const SEMANTIC_SIMILARITY: &str = "SEMANTIC_SIMILARITY";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> RequestContent<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbedContentRequest<'a> {
    content: RequestContent<'a>,
    task_type: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: Option<ContentEmbedding>,
}

#[derive(Debug, Deserialize)]
pub struct ContentEmbedding {
    pub values: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl EmbedContentResponse {
    /// The embedding values, if the response carried them.
    pub fn into_values(self) -> Option<Vec<f64>> {
        self.embedding.and_then(|e| e.values)
    }
}

impl GenerateContentResponse {
    /// Concatenates the text of every part of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.provider_timeout)
            .build()
            .map_err(GeminiError::Http)?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            timeout: config.provider_timeout,
        })
    }

    /// Calls `embedContent` with the semantic-similarity task type.
    pub async fn embed_content(&self, text: &str) -> Result<EmbedContentResponse, GeminiError> {
        let body = EmbedContentRequest {
            content: RequestContent::text(text),
            task_type: SEMANTIC_SIMILARITY,
        };
        self.post(EMBEDDING_MODEL, "embedContent", &body).await
    }

    /// Calls `generateContent` with a single user turn.
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent::text(prompt)],
        };
        self.post(GENERATION_MODEL, "generateContent", &body).await
    }

    async fn post<B, T>(&self, model: &str, action: &str, body: &B) -> Result<T, GeminiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/models/{model}:{action}", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            // Prefer the provider's own message over the raw body
            let message = serde_json::from_str::<GoogleError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(model, action, bytes = text.len(), "Gemini call succeeded");

        Ok(serde_json::from_str(&text)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> GeminiError {
        if err.is_timeout() {
            GeminiError::Timeout(self.timeout)
        } else {
            // Error messages reach API callers; keep request URLs out of them
            GeminiError::Http(err.without_url())
        }
    }
}
