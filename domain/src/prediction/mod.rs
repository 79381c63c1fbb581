//! Prediction results
//!
//! - [`record::PredictionRecord`]: one model's normalized output
//! - [`distribution::ProbabilityDistribution`]: validated `predict_proba` row
//! - [`distribution::ClassProbabilities`]: labelled row in column order
//! - [`report::EnsembleReport`]: all records of one request plus consensus

pub mod distribution;
pub mod record;
pub mod report;

pub use distribution::{ClassProbabilities, ProbabilityDistribution};
pub use record::PredictionRecord;
pub use report::EnsembleReport;
