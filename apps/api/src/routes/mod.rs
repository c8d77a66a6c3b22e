pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/standard",
            post(handlers::handle_generate_standard),
        )
        .route(
            "/api/v1/resumes/compact",
            post(handlers::handle_generate_compact),
        )
        .with_state(state)
}
