//! Serialized model artifacts
//!
//! Trained models are stored as JSON documents tagged by `kind`:
//!
//! ```json
//! {
//!   "kind": "pipeline",
//!   "steps": [
//!     { "name": "scaler", "step": { "kind": "standard_scaler", "mean": [...], "scale": [...] } },
//!     { "name": "svc", "step": { "kind": "linear_svm", "classes": [...], "coef": [...], "intercept": [...] } }
//!   ]
//! }
//! ```
//!
//! Artifacts are validated structurally before they become a [`Classifier`].

pub mod linear;
pub mod loader;
mod math;
pub mod pipeline;
pub mod preprocessing;
pub mod tree;

pub use loader::{ArtifactError, ModelRegistryLoader, ModelSource};

use linear::{LinearSvm, LogisticRegression};
use pipeline::Pipeline;
use preprocessing::StandardScaler;
use serde::{Deserialize, Serialize};
use subtype_domain::{Classifier, ClassifierError, FeatureTable};
use tree::{DecisionTree, RandomForest};

/// A deserialized model document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    LinearSvm(LinearSvm),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
    StandardScaler(StandardScaler),
    Pipeline(PipelineArtifact),
}

/// Ordered steps of a pipeline document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub steps: Vec<PipelineStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub name: String,
    pub step: ModelArtifact,
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
            ModelArtifact::LinearSvm(_) => "linear_svm",
            ModelArtifact::DecisionTree(_) => "decision_tree",
            ModelArtifact::RandomForest(_) => "random_forest",
            ModelArtifact::StandardScaler(_) => "standard_scaler",
            ModelArtifact::Pipeline(_) => "pipeline",
        }
    }

    /// Validate the artifact and turn it into a classifier
    ///
    /// A bare `standard_scaler` is not a classifier and is rejected.
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>, ClassifierError> {
        match self {
            ModelArtifact::LogisticRegression(model) => {
                model.weights.validate()?;
                Ok(Box::new(model))
            }
            ModelArtifact::LinearSvm(model) => {
                model.weights.validate()?;
                Ok(Box::new(model))
            }
            ModelArtifact::DecisionTree(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
            ModelArtifact::RandomForest(model) => {
                model.validate()?;
                Ok(Box::new(model))
            }
            ModelArtifact::StandardScaler(_) => Err(ClassifierError::MalformedModel(
                "standard_scaler is a transformer, not a classifier".to_string(),
            )),
            ModelArtifact::Pipeline(pipeline) => Ok(Box::new(pipeline.build()?)),
        }
    }
}

impl PipelineArtifact {
    /// Build a pipeline: every step but the last must be a scaler
    fn build(self) -> Result<Pipeline, ClassifierError> {
        let mut steps = self.steps;
        let last = steps.pop().ok_or_else(|| {
            ClassifierError::MalformedModel("pipeline has no steps".to_string())
        })?;

        let transforms = steps
            .into_iter()
            .map(|PipelineStep { name, step }| match step {
                ModelArtifact::StandardScaler(scaler) => {
                    scaler.validate()?;
                    Ok((name, scaler))
                }
                other => Err(ClassifierError::MalformedModel(format!(
                    "intermediate step '{}' must be a transformer, got {}",
                    name,
                    other.kind()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Pipeline::new(
            transforms,
            last.name,
            last.step.into_classifier()?,
        ))
    }
}

/// Check that a table has rows and the expected number of columns
pub(crate) fn check_features(
    features: &FeatureTable,
    expected: usize,
) -> Result<(), ClassifierError> {
    if features.n_rows() == 0 {
        return Err(ClassifierError::EmptyInput);
    }
    if features.n_features() != expected {
        return Err(ClassifierError::ShapeMismatch {
            expected,
            actual: features.n_features(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtype_domain::{ClassCode, ProbabilitySupport};

    const SVM_PIPELINE: &str = r#"{
        "kind": "pipeline",
        "steps": [
            {"name": "scaler", "step": {"kind": "standard_scaler", "mean": [0.0, 0.0], "scale": [1.0, 1.0]}},
            {"name": "svc", "step": {
                "kind": "linear_svm",
                "classes": [0, 1, 2],
                "coef": [[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]],
                "intercept": [0.0, 0.0, 0.0]
            }}
        ]
    }"#;

    #[test]
    fn test_pipeline_artifact_builds() {
        let artifact: ModelArtifact = serde_json::from_str(SVM_PIPELINE).unwrap();
        assert_eq!(artifact.kind(), "pipeline");

        let classifier = artifact.into_classifier().unwrap();
        let code = classifier
            .predict(&FeatureTable::from_values(vec![0.0, 2.0]))
            .unwrap();

        assert_eq!(code, vec![ClassCode::new(1)]);
        assert_eq!(
            ProbabilitySupport::resolve(classifier.as_ref()),
            ProbabilitySupport::Unavailable
        );
    }

    #[test]
    fn test_bare_scaler_is_not_a_classifier() {
        let artifact: ModelArtifact =
            serde_json::from_str(r#"{"kind": "standard_scaler", "mean": [0.0], "scale": [1.0]}"#)
                .unwrap();
        assert!(artifact.into_classifier().is_err());
    }

    #[test]
    fn test_pipeline_rejects_estimator_in_the_middle() {
        let artifact = ModelArtifact::Pipeline(PipelineArtifact {
            steps: vec![
                PipelineStep {
                    name: "first".to_string(),
                    step: serde_json::from_str(
                        r#"{"kind": "logistic_regression", "classes": [0, 1], "coef": [[1.0]], "intercept": [0.0]}"#,
                    )
                    .unwrap(),
                },
                PipelineStep {
                    name: "second".to_string(),
                    step: serde_json::from_str(
                        r#"{"kind": "logistic_regression", "classes": [0, 1], "coef": [[1.0]], "intercept": [0.0]}"#,
                    )
                    .unwrap(),
                },
            ],
        });
        assert!(artifact.into_classifier().is_err());
    }

    #[test]
    fn test_empty_pipeline() {
        let artifact = ModelArtifact::Pipeline(PipelineArtifact { steps: vec![] });
        assert!(artifact.into_classifier().is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<ModelArtifact, _> =
            serde_json::from_str(r#"{"kind": "gradient_boosting"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_features() {
        assert!(check_features(&FeatureTable::from_values(vec![1.0]), 1).is_ok());
        assert_eq!(
            check_features(&FeatureTable::from_values(vec![1.0]), 2),
            Err(ClassifierError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
