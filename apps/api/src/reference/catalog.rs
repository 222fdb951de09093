use serde::Serialize;

pub const POPULAR_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "Java",
    "C++",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
];

pub const POPULAR_CERTIFICATIONS: &[&str] = &[
    "AWS Certified",
    "Google Cloud",
    "Azure Certified",
    "PMP",
    "Scrum Master",
    "Cisco CCNA",
    "CompTIA Security+",
    "Salesforce Certified",
];

/// Suggested tags shown next to the skill and certification inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    pub skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

pub fn suggestions() -> Suggestions {
    Suggestions {
        skills: POPULAR_SKILLS,
        certifications: POPULAR_CERTIFICATIONS,
    }
}
