//! Title and location resolution. Every rule list here is evaluated in order
//! and the first hit wins.

use super::tables::{base_salary_for, LocationData, DEFAULT_BASE_SALARY, LOCATIONS};

/// A substring fallback: if the normalized title contains any of `needles`,
/// the base salary of `title_key` is used.
#[derive(Debug, Clone, Copy)]
pub struct TitleFallback {
    pub needles: &'static [&'static str],
    pub title_key: &'static str,
}

pub const TITLE_FALLBACKS: &[TitleFallback] = &[
    TitleFallback {
        needles: &["engineer", "developer"],
        title_key: "software engineer",
    },
    TitleFallback {
        needles: &["data"],
        title_key: "data scientist",
    },
    TitleFallback {
        needles: &["manager"],
        title_key: "product manager",
    },
    TitleFallback {
        needles: &["designer"],
        title_key: "ux designer",
    },
];

/// Resolves the base salary for a free-text job title.
///
/// Exact lowercase match first, then [`TITLE_FALLBACKS`] in order, then
/// [`DEFAULT_BASE_SALARY`].
pub fn resolve_base_salary(job_title: &str) -> u64 {
    let key = job_title.to_lowercase();
    if let Some(salary) = base_salary_for(&key) {
        return salary;
    }

    TITLE_FALLBACKS
        .iter()
        .find(|rule| rule.needles.iter().any(|n| key.contains(n)))
        .and_then(|rule| base_salary_for(rule.title_key))
        .unwrap_or(DEFAULT_BASE_SALARY)
}

/// Finds the first table city such that the input contains the city key, or
/// the city key contains the input's text before its first comma.
///
/// No trimming is applied. An input whose prefix is empty (e.g. ", CA")
/// matches the first entry since every key contains the empty string.
pub fn match_location(location: &str) -> Option<&'static LocationData> {
    let key = location.to_lowercase();
    let prefix = key.split(',').next().unwrap_or_default();

    LOCATIONS
        .iter()
        .find(|l| key.contains(l.key) || l.key.contains(prefix))
}
