//! Axum route handler for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateJobDescriptionResponse {
    pub job_description: String,
}

/// POST /generate_job_description
///
/// Drafts a job-board-ready description from `{"prompt": "..."}`.
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateJobDescriptionResponse>, AppError> {
    let Json(body) = payload?;

    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("No prompt provided".to_string()))?;

    let job_description = state.generator.generate(prompt).await?;

    Ok(Json(GenerateJobDescriptionResponse { job_description }))
}
