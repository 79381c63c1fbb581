//! Application layer for subtype-consensus
//!
//! This crate contains the prediction use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::model_service::{
    BatchOutcome, ErrorCategory, ModelDescription, ModelService, PredictionError,
};
pub use use_cases::run_ensemble::{RunEnsembleInput, RunEnsembleUseCase};
