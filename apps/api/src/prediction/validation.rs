//! Form-layer checks applied before a profile reaches the engine. The engine
//! itself never fails; these mirror what the submission form enforces.

use serde::Serialize;

use crate::models::EmployeeProfile;

pub const MAX_EXPERIENCE_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileValidationResult {
    pub passed: bool,
    pub errors: Vec<FieldError>,
}

impl ProfileValidationResult {
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Collects every violation rather than stopping at the first.
pub fn validate_profile(profile: &EmployeeProfile) -> ProfileValidationResult {
    let mut errors = Vec::new();

    for (field, value) in [
        ("name", &profile.name),
        ("jobTitle", &profile.job_title),
        ("location", &profile.location),
    ] {
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                reason: "is required".to_string(),
            });
        }
    }

    if profile.experience > MAX_EXPERIENCE_YEARS {
        errors.push(FieldError {
            field: "experience",
            reason: format!("must be between 0 and {MAX_EXPERIENCE_YEARS} years"),
        });
    }

    for (field, value) in [
        ("previousSalary", profile.previous_salary),
        ("expectedSalary", profile.expected_salary),
    ] {
        if let Some(amount) = value {
            if !amount.is_finite() || amount < 0.0 {
                errors.push(FieldError {
                    field,
                    reason: "must be a non-negative amount".to_string(),
                });
            }
        }
    }

    ProfileValidationResult {
        passed: errors.is_empty(),
        errors,
    }
}

/// Trims tags, drops blanks, and removes exact duplicates keeping the first
/// occurrence, matching how the form adds skills and certifications.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

pub fn normalize_profile(mut profile: EmployeeProfile) -> EmployeeProfile {
    profile.skills = normalize_tags(&profile.skills);
    profile.certifications = normalize_tags(&profile.certifications);
    profile
}
