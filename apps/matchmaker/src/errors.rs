use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::generator::GenerationError;
use crate::matching::matchmaker::MatchError;

pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON or empty request body.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`. Messages never carry
/// the provider credential.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Embedding(String),

    #[error("{0}")]
    Scoring(String),

    #[error("{0}")]
    Generation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Embedding(_) | AppError::Scoring(_) | AppError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::MissingField(_)
            | MatchError::InvalidRecord(_)
            | MatchError::EmptyExtractedText { .. } => AppError::Validation(err.to_string()),
            MatchError::Embedding { .. } => AppError::Embedding(err.to_string()),
            MatchError::Scoring(_) => AppError::Scoring(err.to_string()),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::EmptyContent => AppError::Generation(
                "Failed to generate job description from Gemini API. \
                 Response may be empty or malformed."
                    .to_string(),
            ),
            GenerationError::Provider(e) => {
                AppError::Generation(format!("Error communicating with Gemini API: {e}"))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");
        AppError::Validation(INVALID_BODY_MESSAGE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed ({status}): {message}");
        } else {
            tracing::warn!("Request rejected ({status}): {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
