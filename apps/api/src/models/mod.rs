pub mod prediction;
pub mod profile;

pub use prediction::{FactorScores, MarketComparison, PredictionResult, SalaryRange};
pub use profile::{Education, EmployeeProfile};
