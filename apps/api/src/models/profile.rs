use serde::{Deserialize, Serialize};

/// Highest degree attained. Anything outside these four values is rejected
/// at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Education {
    Highschool,
    Bachelors,
    Masters,
    Phd,
}

/// Self-reported attributes of one employee. Immutable per prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub name: String,
    pub job_title: String,
    /// Years of experience.
    pub experience: u32,
    pub education: Education,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<f64>,
}
