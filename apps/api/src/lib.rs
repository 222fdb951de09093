//! Salary prediction service: a deterministic, table-driven salary engine
//! behind a small JSON API.

pub mod config;
pub mod errors;
pub mod models;
pub mod prediction;
pub mod reference;
pub mod routes;
pub mod state;
