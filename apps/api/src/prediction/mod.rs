// Salary prediction: reference tables, title/location matching, the scoring
// engine, advisory rules, and the HTTP handler in front of them.
// The engine is synchronous and side-effect free; only the handler awaits.

pub mod engine;
pub mod handlers;
pub mod matching;
pub mod predictor;
pub mod recommendations;
pub mod tables;
pub mod validation;

pub use engine::predict_salary;
pub use predictor::{SalaryPredictor, TablePredictor};
