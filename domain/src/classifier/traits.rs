//! Classifier capability trait
//!
//! Every trained model, whether a bare estimator or a staged pipeline, is
//! handled through [`Classifier`]. `predict` is mandatory; probability output
//! is an optional capability that callers must test before use.

use crate::core::{class_code::ClassCode, error::ClassifierError, features::FeatureTable};

/// A named step of a staged pipeline, as seen by capability checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStep {
    /// Step name as declared in the pipeline (e.g. "scaler", "svc")
    pub name: String,
    /// Kind of the step (e.g. "standard_scaler", "linear_svm")
    pub kind: String,
    /// Whether this step itself can produce class probabilities
    pub has_predict_proba: bool,
}

impl NamedStep {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, has_predict_proba: bool) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            has_predict_proba,
        }
    }
}

/// A trained classifier
///
/// Implementations live in the infrastructure layer (deserialized model
/// artifacts) and in tests (stubs).
pub trait Classifier: Send + Sync {
    /// Short type name of the model (e.g. "random_forest")
    fn kind(&self) -> &str;

    /// Predict one class code per input row
    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError>;

    /// Whether `predict_proba` is available on this object
    ///
    /// For pipelines this describes the composite object only; use
    /// [`super::capability::ProbabilitySupport::resolve`] to inspect the steps.
    fn has_predict_proba(&self) -> bool {
        false
    }

    /// Predict one probability distribution (indexed by class position) per row
    fn predict_proba(&self, _features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        Err(ClassifierError::ProbabilityUnsupported(self.kind().to_string()))
    }

    /// Named steps in declared order, when this classifier is a staged pipeline
    fn named_steps(&self) -> Option<Vec<NamedStep>> {
        None
    }
}
