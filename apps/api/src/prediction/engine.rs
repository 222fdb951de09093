//! Salary engine: a pure, deterministic mapping from an [`EmployeeProfile`] to a
//! [`PredictionResult`].
//!
//! Algorithm:
//! 1. base salary from the job title (exact → substring fallbacks → default)
//! 2. salary = base × experience × education × location multipliers
//! 3. salary × (1 + (skills premium + certification bonus) / 100), rounded
//! 4. range = salary × 0.85 / × 1.15, each rounded independently
//! 5. confidence, factor scores, market comparisons, recommendations
//!
//! Total over its input domain: every lookup has a fallback.

use crate::models::{
    Education, EmployeeProfile, FactorScores, MarketComparison, PredictionResult, SalaryRange,
};
use crate::prediction::matching::{match_location, resolve_base_salary};
use crate::prediction::recommendations::generate_recommendations;
use crate::prediction::tables::{skill_for, UNMATCHED_LOCATION_AVERAGE};

const EXPERIENCE_STEP: f64 = 0.08;
const EXPERIENCE_CAP: f64 = 2.5;
const CERTIFICATION_STEP: u32 = 5;
const CERTIFICATION_CAP: u32 = 25;
const RANGE_LOW: f64 = 0.85;
const RANGE_HIGH: f64 = 1.15;

const BASE_CONFIDENCE: u32 = 70;
const MAX_CONFIDENCE: u32 = 95;

const MARKET_FACTOR: f64 = 75.0;

pub fn experience_multiplier(years: u32) -> f64 {
    (1.0 + years as f64 * EXPERIENCE_STEP).min(EXPERIENCE_CAP)
}

pub fn education_multiplier(education: Education) -> f64 {
    match education {
        Education::Highschool => 0.9,
        Education::Bachelors => 1.0,
        Education::Masters => 1.15,
        Education::Phd => 1.3,
    }
}

/// Sum of premiums for skills found in the skill table. Uncapped.
pub fn skills_premium(skills: &[String]) -> u32 {
    skills
        .iter()
        .filter_map(|s| skill_for(&s.to_lowercase()))
        .map(|s| s.premium)
        .sum()
}

pub fn certification_bonus(count: usize) -> u32 {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    count.saturating_mul(CERTIFICATION_STEP).min(CERTIFICATION_CAP)
}

pub fn compute_confidence(profile: &EmployeeProfile) -> u32 {
    let mut confidence = BASE_CONFIDENCE;
    if profile.experience > 0 {
        confidence += 5;
    }
    if profile.skills.len() > 3 {
        confidence += 10;
    }
    if !profile.certifications.is_empty() {
        confidence += 5;
    }
    if profile.previous_salary.is_some_and(|s| s > 0.0) {
        confidence += 10;
    }
    confidence.min(MAX_CONFIDENCE)
}

pub fn compute_factors(
    experience: u32,
    education_multiplier: f64,
    location_multiplier: f64,
    skills_premium: u32,
) -> FactorScores {
    FactorScores {
        experience: percent((experience as f64 / 15.0) * 100.0),
        education: percent((education_multiplier - 0.9) * 250.0),
        location: percent((location_multiplier - 0.8) * 166.67),
        skills: percent(skills_premium as f64 * 2.0),
        market: MARKET_FACTOR,
    }
}

pub fn predict_salary(profile: &EmployeeProfile) -> PredictionResult {
    let base_salary = resolve_base_salary(&profile.job_title) as f64;
    let experience_mult = experience_multiplier(profile.experience);
    let education_mult = education_multiplier(profile.education);

    let location = match_location(&profile.location);
    let location_mult = location.map(|l| l.multiplier).unwrap_or(1.0);

    let premium = skills_premium(&profile.skills);
    let cert_bonus = certification_bonus(profile.certifications.len());

    let mut salary = base_salary * experience_mult * education_mult * location_mult;
    salary *= 1.0 + (premium + cert_bonus) as f64 / 100.0;

    let salary_range = SalaryRange {
        min: round_currency(salary * RANGE_LOW),
        max: round_currency(salary * RANGE_HIGH),
    };

    let factors = compute_factors(profile.experience, education_mult, location_mult, premium);

    let comparison = MarketComparison {
        industry: round_currency(base_salary * location_mult),
        location: location
            .map(|l| l.average_salary)
            .unwrap_or(UNMATCHED_LOCATION_AVERAGE),
        experience: round_currency(base_salary * experience_mult),
    };

    PredictionResult {
        predicted_salary: round_currency(salary),
        salary_range,
        confidence: compute_confidence(profile),
        recommendations: generate_recommendations(profile, &factors),
        factors,
        comparison,
    }
}

/// Nearest whole currency unit, halves rounded up.
fn round_currency(amount: f64) -> u64 {
    amount.round().max(0.0) as u64
}

fn percent(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::recommendations::{MAX_RECOMMENDATIONS, SEEK_SENIOR_ROLES};

    fn make_profile(
        job_title: &str,
        experience: u32,
        education: Education,
        location: &str,
        skills: &[&str],
        certifications: &[&str],
    ) -> EmployeeProfile {
        EmployeeProfile {
            name: "Jordan".to_string(),
            job_title: job_title.to_string(),
            experience,
            education,
            location: location.to_string(),
            company: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            certifications: certifications.iter().map(|s| s.to_string()).collect(),
            previous_salary: None,
            expected_salary: None,
        }
    }

    fn seattle_engineer() -> EmployeeProfile {
        make_profile(
            "Software Engineer",
            5,
            Education::Bachelors,
            "Seattle, WA",
            &["Python", "AWS"],
            &[],
        )
    }

    #[test]
    fn test_seattle_engineer_regression() {
        let result = predict_salary(&seattle_engineer());
        // 95000 × 1.4 × 1.0 × 1.25 × 1.25 = 207812.5
        assert_eq!(result.predicted_salary, 207_813);
        assert_eq!(result.confidence, 75);
        assert_eq!(result.comparison.location, 135_000);
        assert_eq!(result.comparison.industry, 118_750);
        assert_eq!(result.comparison.experience, 133_000);
        assert_eq!(result.factors.skills, 50.0);
        assert_eq!(result.factors.market, 75.0);
    }

    #[test]
    fn test_range_is_rounded_from_unrounded_salary() {
        let result = predict_salary(&seattle_engineer());
        assert_eq!(result.salary_range.min, 176_641); // 176640.625
        assert_eq!(result.salary_range.max, 238_984); // 238984.375
        assert!(result.salary_range.min <= result.predicted_salary);
        assert!(result.predicted_salary <= result.salary_range.max);
    }

    #[test]
    fn test_unknown_title_and_location_fall_back() {
        let p = make_profile("Widget Tinkerer", 0, Education::Bachelors, "Smalltown", &[], &[]);
        let result = predict_salary(&p);
        assert_eq!(result.predicted_salary, 85_000);
        assert_eq!(result.comparison.industry, 85_000);
        assert_eq!(result.comparison.location, 95_000);
        assert_eq!(result.comparison.experience, 85_000);
        assert_eq!(result.confidence, 70);
    }

    #[test]
    fn test_junior_title_gets_senior_recommendation() {
        let p = make_profile("Junior Developer", 2, Education::Masters, "Austin, TX", &[], &[]);
        let result = predict_salary(&p);
        assert!(result.recommendations.iter().any(|r| r == SEEK_SENIOR_ROLES));
    }

    #[test]
    fn test_experience_multiplier_caps_at_two_and_a_half() {
        assert_eq!(experience_multiplier(0), 1.0);
        assert!((experience_multiplier(10) - 1.8).abs() < 1e-9);
        assert_eq!(experience_multiplier(19), 2.5);
        assert_eq!(experience_multiplier(40), 2.5);
    }

    #[test]
    fn test_certification_bonus_caps_at_25() {
        assert_eq!(certification_bonus(0), 0);
        assert_eq!(certification_bonus(3), 15);
        assert_eq!(certification_bonus(5), 25);
        assert_eq!(certification_bonus(12), 25);
    }

    #[test]
    fn test_skills_premium_is_case_insensitive_and_ignores_unknown() {
        let skills = vec![
            "MACHINE LEARNING".to_string(),
            "ai".to_string(),
            "Cobol".to_string(),
            "Node.js".to_string(),
        ];
        assert_eq!(skills_premium(&skills), 25 + 30 + 10);
    }

    #[test]
    fn test_skills_premium_is_uncapped() {
        let skills: Vec<String> = ["AI", "Machine Learning", "Blockchain", "Kubernetes", "AWS"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills_premium(&skills), 108);
        let p = make_profile("Software Engineer", 0, Education::Bachelors, "Smalltown", &[], &[]);
        let mut loaded = p.clone();
        loaded.skills = skills;
        // 95000 × 2.08
        assert_eq!(predict_salary(&loaded).predicted_salary, 197_600);
        assert_eq!(predict_salary(&loaded).factors.skills, 100.0);
    }

    #[test]
    fn test_confidence_bonuses_and_cap() {
        let mut p = make_profile(
            "Software Engineer",
            5,
            Education::Bachelors,
            "Boston",
            &["a", "b", "c", "d"],
            &["PMP"],
        );
        assert_eq!(compute_confidence(&p), 90);
        p.previous_salary = Some(100_000.0);
        assert_eq!(compute_confidence(&p), 95);
    }

    #[test]
    fn test_previous_salary_never_lowers_confidence() {
        let mut p = seattle_engineer();
        let without = predict_salary(&p).confidence;
        p.previous_salary = Some(150_000.0);
        let with = predict_salary(&p).confidence;
        assert!(with >= without);
        assert_eq!(with, 85);
    }

    #[test]
    fn test_zero_previous_salary_is_absent() {
        let mut p = seattle_engineer();
        let absent = compute_confidence(&p);
        p.previous_salary = Some(0.0);
        assert_eq!(compute_confidence(&p), absent);
        p.previous_salary = Some(1.0);
        assert_eq!(compute_confidence(&p), absent + 10);
    }

    #[test]
    fn test_expected_salary_does_not_affect_result() {
        let mut p = seattle_engineer();
        let before = predict_salary(&p);
        p.expected_salary = Some(300_000.0);
        assert_eq!(predict_salary(&p), before);
    }

    #[test]
    fn test_factor_scores_are_bounded() {
        let p = make_profile(
            "Principal Engineer",
            40,
            Education::Phd,
            "San Francisco, CA",
            &["AI", "Machine Learning", "Blockchain"],
            &["a", "b", "c", "d", "e", "f"],
        );
        let f = predict_salary(&p).factors;
        for score in [f.experience, f.education, f.location, f.skills, f.market] {
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
        assert_eq!(f.experience, 100.0);
        assert_eq!(f.location, 100.0);
        assert_eq!(f.education, 100.0);
    }

    #[test]
    fn test_factor_mapping_endpoints() {
        let f = compute_factors(0, 0.9, 0.85, 0);
        assert_eq!(f.experience, 0.0);
        assert_eq!(f.education, 0.0);
        assert!((f.location - 8.3335).abs() < 1e-3);
        assert_eq!(f.skills, 0.0);

        let f = compute_factors(15, 1.15, 1.0, 20);
        assert_eq!(f.experience, 100.0);
        assert!((f.education - 62.5).abs() < 1e-9);
        assert!((f.location - 33.334).abs() < 1e-3);
        assert_eq!(f.skills, 40.0);
    }

    #[test]
    fn test_education_scales_salary() {
        let mut p = make_profile("Software Engineer", 0, Education::Highschool, "Smalltown", &[], &[]);
        assert_eq!(predict_salary(&p).predicted_salary, 85_500);
        p.education = Education::Phd;
        assert_eq!(predict_salary(&p).predicted_salary, 123_500);
    }

    #[test]
    fn test_recommendations_never_exceed_limit() {
        let p = make_profile("Junior Clerk", 0, Education::Highschool, "Smalltown", &[], &[]);
        let result = predict_salary(&p);
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let p = make_profile(
            "Data Engineer",
            7,
            Education::Masters,
            "New York, NY",
            &["SQL", "Python", "Docker", "Kubernetes"],
            &["AWS Certified"],
        );
        let a = serde_json::to_vec(&predict_salary(&p)).unwrap();
        let b = serde_json::to_vec(&predict_salary(&p)).unwrap();
        assert_eq!(a, b);
    }
}
