//! Staged pipeline: preprocessing steps followed by one estimator

use super::preprocessing::StandardScaler;
use subtype_domain::{ClassCode, Classifier, ClassifierError, FeatureTable, NamedStep};

/// A fitted pipeline
///
/// Like the composite it was exported from, the pipeline always offers
/// `predict_proba` and delegates to its estimator, which may not support it.
/// Capability checks should go through [`Classifier::named_steps`].
pub struct Pipeline {
    transforms: Vec<(String, StandardScaler)>,
    estimator_name: String,
    estimator: Box<dyn Classifier>,
}

impl Pipeline {
    pub fn new(
        transforms: Vec<(String, StandardScaler)>,
        estimator_name: impl Into<String>,
        estimator: Box<dyn Classifier>,
    ) -> Self {
        Self {
            transforms,
            estimator_name: estimator_name.into(),
            estimator,
        }
    }

    fn transform(&self, features: &FeatureTable) -> Result<FeatureTable, ClassifierError> {
        self.transforms
            .iter()
            .try_fold(features.clone(), |table, (_, scaler)| scaler.transform(&table))
    }
}

impl Classifier for Pipeline {
    fn kind(&self) -> &str {
        "pipeline"
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        self.estimator.predict(&self.transform(features)?)
    }

    fn has_predict_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        self.estimator.predict_proba(&self.transform(features)?)
    }

    fn named_steps(&self) -> Option<Vec<NamedStep>> {
        let mut steps: Vec<NamedStep> = self
            .transforms
            .iter()
            .map(|(name, _)| NamedStep::new(name.as_str(), "standard_scaler", false))
            .collect();
        steps.push(NamedStep::new(
            self.estimator_name.as_str(),
            self.estimator.kind(),
            self.estimator.has_predict_proba(),
        ));
        Some(steps)
    }
}
