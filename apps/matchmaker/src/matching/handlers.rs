//! Axum route handler for the Match API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, INVALID_BODY_MESSAGE};
use crate::matching::matchmaker::MatchResult;
use crate::state::AppState;

/// POST /match
///
/// Scores `candidate_details` against `job_description`.
/// Returns `{"match_score", "interpretation"}`; input faults are 400, provider
/// and scoring faults are 500.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(body) = payload?;

    let body = match body {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(AppError::Validation(INVALID_BODY_MESSAGE.to_string())),
    };

    let match_id = Uuid::new_v4();
    let result = state
        .matchmaker
        .run(body.get("candidate_details"), body.get("job_description"))
        .instrument(info_span!("match", %match_id))
        .await?;

    Ok(Json(result))
}
