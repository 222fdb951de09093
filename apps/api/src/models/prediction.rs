use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// Diagnostic 0–100 ratings per input dimension. These do not feed back
/// into the predicted salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub experience: f64,
    pub education: f64,
    pub location: f64,
    pub skills: f64,
    pub market: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketComparison {
    pub industry: u64,
    pub location: u64,
    pub experience: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_salary: u64,
    pub salary_range: SalaryRange,
    pub confidence: u32, // 70 – 95
    pub factors: FactorScores,
    pub comparison: MarketComparison,
    pub recommendations: Vec<String>, // at most 6
}
