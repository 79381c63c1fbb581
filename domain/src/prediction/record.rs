//! Per-model prediction record

use super::distribution::{ClassProbabilities, ProbabilityDistribution};
use crate::core::class_code::ClassCode;
use crate::core::labels::ClassLabels;
use serde::Serialize;

/// Result of one model invocation (Value Object)
///
/// Immutable once built. `confidence` is always the maximum of
/// `probabilities`; both are present together or absent together.
///
/// # Example
///
/// ```
/// use subtype_domain::{ClassCode, ClassLabels, PredictionRecord, ProbabilityDistribution};
///
/// let labels = ClassLabels::cancer_subtypes();
/// let dist = ProbabilityDistribution::new(vec![0.1, 0.85, 0.03, 0.01, 0.01]).unwrap();
/// let record = PredictionRecord::new("Random Forest", ClassCode::new(1), &labels)
///     .with_distribution(&dist, &labels);
///
/// assert_eq!(record.class_label(), "Breast Invasive Ductal Carcinoma");
/// assert_eq!(record.confidence(), Some(0.85));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRecord {
    model_name: String,
    class_code: ClassCode,
    class_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probabilities: Option<ClassProbabilities>,
}

impl PredictionRecord {
    /// Create a record without probability information
    pub fn new(model_name: impl Into<String>, class_code: ClassCode, labels: &ClassLabels) -> Self {
        Self {
            model_name: model_name.into(),
            class_code,
            class_label: labels.label(class_code).to_string(),
            confidence: None,
            probabilities: None,
        }
    }

    /// Attach a probability distribution, deriving the confidence from it
    pub fn with_distribution(
        mut self,
        distribution: &ProbabilityDistribution,
        labels: &ClassLabels,
    ) -> Self {
        self.confidence = Some(distribution.max());
        self.probabilities = Some(distribution.labelled(labels));
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn class_code(&self) -> ClassCode {
        self.class_code
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn probabilities(&self) -> Option<&ClassProbabilities> {
        self.probabilities.as_ref()
    }
}
