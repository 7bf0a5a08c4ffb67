pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(handlers::handle_get_job))
        .route(
            "/api/v1/jobs/:id/rankings",
            get(handlers::handle_job_rankings),
        )
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route("/api/v1/rankings", post(handlers::handle_rank_records))
        .with_state(state)
}
