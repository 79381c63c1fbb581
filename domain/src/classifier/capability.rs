//! Probability capability resolution
//!
//! A staged pipeline (scaler + estimator) may report `predict_proba` on the
//! composite even when its estimator was fitted without probability output,
//! so pipelines are judged by their steps instead of by the composite.

use super::traits::Classifier;
use serde::{Deserialize, Serialize};

/// How (and whether) a classifier can produce class probabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ProbabilitySupport {
    /// A bare estimator that exposes `predict_proba` directly
    Estimator,
    /// A pipeline where the named step exposes `predict_proba`
    PipelineStep { step: String },
    /// No probability output available
    Unavailable,
}

impl ProbabilitySupport {
    /// Resolve the probability capability of a classifier
    ///
    /// Pipelines are scanned in declared order and the first step exposing
    /// `predict_proba` is used. A pipeline without such a step is
    /// `Unavailable`, not an error.
    pub fn resolve(classifier: &dyn Classifier) -> Self {
        match classifier.named_steps() {
            Some(steps) => steps
                .into_iter()
                .find(|step| step.has_predict_proba)
                .map(|step| ProbabilitySupport::PipelineStep { step: step.name })
                .unwrap_or(ProbabilitySupport::Unavailable),
            None if classifier.has_predict_proba() => ProbabilitySupport::Estimator,
            None => ProbabilitySupport::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, ProbabilitySupport::Unavailable)
    }
}

impl std::fmt::Display for ProbabilitySupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbabilitySupport::Estimator => write!(f, "estimator"),
            ProbabilitySupport::PipelineStep { step } => write!(f, "pipeline step '{}'", step),
            ProbabilitySupport::Unavailable => write!(f, "unavailable"),
        }
    }
}
