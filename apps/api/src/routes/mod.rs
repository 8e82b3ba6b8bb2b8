pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match/jobs", post(handlers::handle_rank_jobs))
        .route(
            "/api/v1/match/candidates",
            post(handlers::handle_rank_candidates),
        )
        .route("/api/v1/match/score", post(handlers::handle_score_pair))
        .fallback(not_found)
        .with_state(state)
}
