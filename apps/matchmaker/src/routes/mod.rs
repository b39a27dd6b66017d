pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/match", post(matching::handle_match))
        .route(
            "/generate_job_description",
            post(generation::handle_generate_job_description),
        )
        .with_state(state)
}
