pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/answers",
            post(handlers::handle_record_answer),
        )
        .route("/api/v1/sessions/:id/back", post(handlers::handle_retreat))
        .route(
            "/api/v1/sessions/:id/result",
            get(handlers::handle_result),
        )
        .route("/api/v1/score", post(handlers::handle_score))
        .with_state(state)
}
