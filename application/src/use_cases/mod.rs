//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod model_service;
pub mod run_ensemble;
