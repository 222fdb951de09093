//! Rule-based advisory list. Every rule is evaluated, matches are collected in
//! priority order, and only then is the list cut to [`MAX_RECOMMENDATIONS`].

use crate::models::{Education, EmployeeProfile, FactorScores};

pub const MAX_RECOMMENDATIONS: usize = 6;

pub const GAIN_EXPERIENCE: &str =
    "Gain more hands-on experience in your field to increase your market value";
pub const FURTHER_EDUCATION: &str =
    "Consider pursuing additional education or certifications in your field";
pub const LEARN_SKILLS: &str =
    "Learn high-demand skills like cloud computing, AI/ML, or modern frameworks";
pub const OBTAIN_CERTIFICATIONS: &str = "Obtain industry certifications to validate your expertise";
pub const RELOCATE_OR_REMOTE: &str =
    "Consider opportunities in higher-paying markets or remote work";
pub const SEEK_SENIOR_ROLES: &str = "Seek senior-level positions that match your experience level";
pub const BUILD_NETWORK: &str =
    "Build a strong professional network and maintain an updated LinkedIn profile";
pub const NEGOTIATE: &str =
    "Negotiate your current salary or seek opportunities with compensation reviews";

struct Rule {
    applies: fn(&EmployeeProfile, &FactorScores) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        applies: |_, f| f.experience < 60.0,
        message: GAIN_EXPERIENCE,
    },
    Rule {
        applies: |p, _| matches!(p.education, Education::Highschool | Education::Bachelors),
        message: FURTHER_EDUCATION,
    },
    Rule {
        applies: |_, f| f.skills < 70.0,
        message: LEARN_SKILLS,
    },
    Rule {
        applies: |p, _| p.certifications.is_empty(),
        message: OBTAIN_CERTIFICATIONS,
    },
    Rule {
        applies: |_, f| f.location < 60.0,
        message: RELOCATE_OR_REMOTE,
    },
    Rule {
        applies: |p, _| p.job_title.to_lowercase().contains("junior") || p.experience > 3,
        message: SEEK_SENIOR_ROLES,
    },
    // Generic advice, always last.
    Rule {
        applies: |_, _| true,
        message: BUILD_NETWORK,
    },
    Rule {
        applies: |_, _| true,
        message: NEGOTIATE,
    },
];

pub fn generate_recommendations(profile: &EmployeeProfile, factors: &FactorScores) -> Vec<String> {
    let mut recommendations: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(profile, factors))
        .map(|rule| rule.message.to_string())
        .collect();
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
