pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::prediction::handlers as prediction;
use crate::reference::handlers as reference;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prediction API
        .route("/api/v1/predictions", post(prediction::handle_predict))
        // Reference API
        .route(
            "/api/v1/reference/locations",
            get(reference::handle_locations),
        )
        .route("/api/v1/reference/skills", get(reference::handle_skills))
        .route(
            "/api/v1/reference/job-titles",
            get(reference::handle_job_titles),
        )
        .route(
            "/api/v1/reference/suggestions",
            get(reference::handle_suggestions),
        )
        .fallback(not_found)
        .with_state(state)
}
