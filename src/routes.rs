use crate::handlers::{algorithms, evaluation, explain, future, health_check, index};
use axum::{Router, routing::get};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/algorithms", get(algorithms))
        .route("/evaluation", get(evaluation))
        .route("/future", get(future))
        .route("/ai", get(explain))
        .route("/health", get(health_check))
}
