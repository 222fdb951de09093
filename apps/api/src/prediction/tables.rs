//! Static reference tables. Ordered slices, never mutated: iteration order is
//! the tie-break order for location matching, so entries must not be re-sorted.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Demand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub key: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
    pub average_salary: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillData {
    pub key: &'static str,
    pub name: &'static str,
    pub premium: u32, // percentage points
    pub demand: Demand,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BaseSalary {
    pub title: &'static str,
    pub salary: u64,
}

pub const DEFAULT_BASE_SALARY: u64 = 85_000;

/// Average used for the location comparison when no city matches.
pub const UNMATCHED_LOCATION_AVERAGE: u64 = 95_000;

pub const LOCATIONS: &[LocationData] = &[
    loc("san francisco", "San Francisco, CA", 1.4, 150_000),
    loc("new york", "New York, NY", 1.3, 140_000),
    loc("seattle", "Seattle, WA", 1.25, 135_000),
    loc("boston", "Boston, MA", 1.2, 125_000),
    loc("los angeles", "Los Angeles, CA", 1.15, 120_000),
    loc("chicago", "Chicago, IL", 1.05, 110_000),
    loc("austin", "Austin, TX", 1.1, 115_000),
    loc("denver", "Denver, CO", 1.05, 108_000),
    loc("atlanta", "Atlanta, GA", 0.95, 100_000),
    loc("dallas", "Dallas, TX", 0.9, 95_000),
    loc("phoenix", "Phoenix, AZ", 0.85, 90_000),
    loc("miami", "Miami, FL", 0.9, 92_000),
];

pub const SKILLS: &[SkillData] = &[
    skill("machine learning", "Machine Learning", 25, Demand::High),
    skill("ai", "Artificial Intelligence", 30, Demand::High),
    skill("blockchain", "Blockchain", 20, Demand::High),
    skill("kubernetes", "Kubernetes", 18, Demand::High),
    skill("aws", "AWS", 15, Demand::High),
    skill("react", "React", 12, Demand::High),
    skill("python", "Python", 10, Demand::High),
    skill("javascript", "JavaScript", 8, Demand::High),
    skill("typescript", "TypeScript", 10, Demand::High),
    skill("docker", "Docker", 12, Demand::High),
    skill("node.js", "Node.js", 10, Demand::High),
    skill("data analysis", "Data Analysis", 15, Demand::High),
    skill("sql", "SQL", 8, Demand::Medium),
    skill("java", "Java", 8, Demand::Medium),
    skill("c++", "C++", 10, Demand::Medium),
    skill("project management", "Project Management", 12, Demand::Medium),
];

pub const BASE_SALARIES: &[BaseSalary] = &[
    // Engineering
    base("software engineer", 95_000),
    base("senior software engineer", 135_000),
    base("staff software engineer", 175_000),
    base("principal engineer", 220_000),
    base("engineering manager", 160_000),
    base("tech lead", 150_000),
    base("full stack developer", 90_000),
    base("frontend developer", 85_000),
    base("backend developer", 95_000),
    base("mobile developer", 100_000),
    base("devops engineer", 110_000),
    base("security engineer", 115_000),
    base("machine learning engineer", 130_000),
    base("data engineer", 120_000),
    // Data science
    base("data scientist", 115_000),
    base("senior data scientist", 150_000),
    base("data analyst", 75_000),
    base("business analyst", 70_000),
    base("research scientist", 140_000),
    // Product & design
    base("product manager", 125_000),
    base("senior product manager", 160_000),
    base("ux designer", 85_000),
    base("ui designer", 80_000),
    base("product designer", 95_000),
];

const fn loc(key: &'static str, name: &'static str, multiplier: f64, average_salary: u64) -> LocationData {
    LocationData {
        key,
        name,
        multiplier,
        average_salary,
    }
}

const fn skill(key: &'static str, name: &'static str, premium: u32, demand: Demand) -> SkillData {
    SkillData {
        key,
        name,
        premium,
        demand,
    }
}

const fn base(title: &'static str, salary: u64) -> BaseSalary {
    BaseSalary { title, salary }
}

/// Exact lookup by lowercase key.
pub fn base_salary_for(title_key: &str) -> Option<u64> {
    BASE_SALARIES
        .iter()
        .find(|b| b.title == title_key)
        .map(|b| b.salary)
}

/// Exact lookup by lowercase key.
pub fn skill_for(skill_key: &str) -> Option<&'static SkillData> {
    SKILLS.iter().find(|s| s.key == skill_key)
}
