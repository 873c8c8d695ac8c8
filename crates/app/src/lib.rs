//! Talentboard application composition root
//!
//! Composes both domain routers into a single application.

use axum::Router;
use sqlx::PgPool;
use talentboard_jobs::{JobsRepositories, JobsState};
use talentboard_users::{UsersRepositories, UsersState};

/// Create the main application router with all routes
pub fn create_app(pool: PgPool) -> Router {
    let users_state = UsersState {
        repos: UsersRepositories::new(pool.clone()),
    };
    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Talentboard API v0.1.0" }),
        )
        .merge(talentboard_users::routes().with_state(users_state))
        .merge(talentboard_jobs::routes().with_state(jobs_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
