//! Domain layer for subtype-consensus
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classifiers
//!
//! Every trained model is a [`Classifier`]: `predict` is always available,
//! `predict_proba` is an optional capability. Staged pipelines expose their
//! steps so that [`ProbabilitySupport`] can inspect them individually.
//!
//! ## Consensus
//!
//! When several models are registered, each [`PredictionRecord`] is one vote.
//! [`ConsensusSummary`] picks the majority class, breaking ties by mean
//! confidence and then by lowest class code.

pub mod classifier;
pub mod clinical;
pub mod config;
pub mod consensus;
pub mod core;
pub mod prediction;

// Re-export commonly used types
pub use classifier::{Classifier, ModelRegistry, NamedStep, ProbabilitySupport, RegisteredModel};
pub use clinical::{ClinicalInput, EncodingMap, FEATURE_ORDER, InputError, encoding_maps};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{ConsensusSummary, Resolution, VoteCount, VoteTally};
pub use self::core::{
    class_code::ClassCode,
    error::ClassifierError,
    features::FeatureTable,
    labels::{ClassLabels, UNKNOWN_LABEL},
};
pub use prediction::{
    ClassProbabilities, EnsembleReport, PredictionRecord, ProbabilityDistribution,
};
