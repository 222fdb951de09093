//! Axum route handlers for the Reference API.

use axum::Json;
use serde::Serialize;

use crate::prediction::tables::{
    BaseSalary, LocationData, SkillData, BASE_SALARIES, DEFAULT_BASE_SALARY, LOCATIONS, SKILLS,
};
use crate::reference::catalog::{suggestions, Suggestions};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitlesResponse {
    pub titles: &'static [BaseSalary],
    pub default_salary: u64,
}

/// GET /api/v1/reference/locations
pub async fn handle_locations() -> Json<&'static [LocationData]> {
    Json(LOCATIONS)
}

/// GET /api/v1/reference/skills
pub async fn handle_skills() -> Json<&'static [SkillData]> {
    Json(SKILLS)
}

/// GET /api/v1/reference/job-titles
pub async fn handle_job_titles() -> Json<JobTitlesResponse> {
    Json(JobTitlesResponse {
        titles: BASE_SALARIES,
        default_salary: DEFAULT_BASE_SALARY,
    })
}

/// GET /api/v1/reference/suggestions
pub async fn handle_suggestions() -> Json<Suggestions> {
    Json(suggestions())
}
