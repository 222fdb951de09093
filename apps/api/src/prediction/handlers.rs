//! Axum route handlers for the Prediction API.

use std::time::Duration;

use axum::{extract::State, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{EmployeeProfile, PredictionResult};
use crate::prediction::validation::{normalize_profile, validate_profile};
use crate::state::AppState;

/// POST /api/v1/predictions
///
/// Validates and normalizes the submitted profile, then runs the configured
/// predictor. Returns 400 with every field violation if validation fails.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(profile): Json<EmployeeProfile>,
) -> Result<Json<PredictionResult>, AppError> {
    let validation = validate_profile(&profile);
    if !validation.passed {
        return Err(AppError::Validation(validation.summary()));
    }
    let profile = normalize_profile(profile);

    if state.config.simulated_latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;
    }

    let result = state.predictor.predict(&profile);
    debug!(
        job_title = %profile.job_title,
        predicted_salary = result.predicted_salary,
        backend = state.predictor.backend(),
        "Prediction computed"
    );

    Ok(Json(result))
}
