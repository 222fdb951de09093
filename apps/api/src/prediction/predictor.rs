//! Pluggable predictor. `AppState` carries an `Arc<dyn SalaryPredictor>`, so a
//! different backend can be swapped in at startup without touching handlers.

use crate::models::{EmployeeProfile, PredictionResult};
use crate::prediction::engine::predict_salary;

pub trait SalaryPredictor: Send + Sync {
    fn predict(&self, profile: &EmployeeProfile) -> PredictionResult;

    /// Short label reported by the service for transparency.
    fn backend(&self) -> &'static str;
}

/// Default backend: static lookup tables plus fixed multipliers.
pub struct TablePredictor;

impl SalaryPredictor for TablePredictor {
    fn predict(&self, profile: &EmployeeProfile) -> PredictionResult {
        predict_salary(profile)
    }

    fn backend(&self) -> &'static str {
        "table"
    }
}
