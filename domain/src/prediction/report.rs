//! Ensemble report

use super::record::PredictionRecord;
use crate::consensus::ConsensusSummary;
use serde::Serialize;

/// Outcome of running every registered model on one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleReport {
    /// Successful predictions, in registry order
    pub predictions: Vec<PredictionRecord>,
    /// Consensus across `predictions`, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusSummary>,
    /// Models that failed and were left out of `predictions`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_models: Vec<String>,
}

impl EnsembleReport {
    pub fn new(predictions: Vec<PredictionRecord>) -> Self {
        Self {
            predictions,
            consensus: None,
            failed_models: Vec::new(),
        }
    }

    pub fn with_consensus(mut self, consensus: ConsensusSummary) -> Self {
        self.consensus = Some(consensus);
        self
    }

    pub fn with_failed_models(mut self, failed: Vec<String>) -> Self {
        self.failed_models = failed;
        self
    }

    /// Names of the models that produced a prediction
    pub fn model_names(&self) -> Vec<&str> {
        self.predictions.iter().map(|p| p.model_name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{class_code::ClassCode, labels::ClassLabels};

    #[test]
    fn test_report_serialization_skips_empty_parts() {
        let labels = ClassLabels::cancer_subtypes();
        let report = EnsembleReport::new(vec![PredictionRecord::new(
            "SVM",
            ClassCode::new(1),
            &labels,
        )]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["predictions"].as_array().unwrap().len(), 1);
        assert!(json.get("consensus").is_none());
        assert!(json.get("failed_models").is_none());
        assert_eq!(report.model_names(), vec!["SVM"]);
    }
}
