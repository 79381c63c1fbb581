//! Classifier domain
//!
//! - [`traits::Classifier`]: polymorphic `predict` / optional `predict_proba`
//! - [`capability::ProbabilitySupport`]: pipeline-aware capability check
//! - [`registry::ModelRegistry`]: ordered, read-only set of named classifiers

pub mod capability;
pub mod registry;
pub mod traits;

pub use capability::ProbabilitySupport;
pub use registry::{ModelRegistry, RegisteredModel};
pub use traits::{Classifier, NamedStep};
