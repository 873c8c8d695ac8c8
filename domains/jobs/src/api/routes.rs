//! Route definitions for the Jobs domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::jobs;
use super::state::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/jobs/{id}",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
        .route("/jobs/{id}/status", patch(jobs::update_job_status))
}
