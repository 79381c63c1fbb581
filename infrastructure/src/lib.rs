//! Infrastructure layer for subtype-consensus
//!
//! This crate contains adapters for the outside world: model artifacts
//! deserialized from disk and configuration file loading.

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileEnsembleConfig, FileModelSource, FileOutputConfig};
pub use models::{ArtifactError, ModelArtifact, ModelRegistryLoader, ModelSource};
