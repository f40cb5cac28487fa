pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::reviews::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/reviews/generate",
            post(handlers::handle_generate_review),
        )
        .route(
            "/api/v1/reviews/preview",
            post(handlers::handle_preview_review),
        )
        .route(
            "/api/v1/reviews/phrases",
            get(handlers::handle_phrase_inventory),
        )
        .with_state(state)
}
