//! Serializable response views
//!
//! Mirrors the JSON shape of the prediction API: probabilities and
//! confidence are rounded to 4 decimals and omitted when absent.

use serde::Serialize;
use std::collections::BTreeMap;
use subtype_application::ModelDescription;
use subtype_domain::{
    ClassCode, ClassLabels, ClassProbabilities, ConsensusSummary, EnsembleReport, FEATURE_ORDER,
    PredictionRecord, encoding_maps,
};

const DECIMALS: f64 = 10_000.0;

pub fn round4(value: f64) -> f64 {
    (value * DECIMALS).round() / DECIMALS
}

/// One model's prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub model_name: String,
    pub class_code: ClassCode,
    pub class_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<ClassProbabilities>,
}

impl From<&PredictionRecord> for PredictionResponse {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            model_name: record.model_name().to_string(),
            class_code: record.class_code(),
            class_label: record.class_label().to_string(),
            confidence: record.confidence().map(round4),
            probabilities: record
                .probabilities()
                .map(|probabilities| probabilities.map_values(round4)),
        }
    }
}

/// Every model's prediction plus the consensus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleResponse {
    pub predictions: Vec<PredictionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_models: Vec<String>,
}

impl From<&EnsembleReport> for EnsembleResponse {
    fn from(report: &EnsembleReport) -> Self {
        Self {
            predictions: report.predictions.iter().map(PredictionResponse::from).collect(),
            consensus: report.consensus.clone(),
            failed_models: report.failed_models.clone(),
        }
    }
}

/// Catalogue of the loaded models and the input/output vocabulary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfoResponse {
    pub models: Vec<ModelDescription>,
    pub features: Vec<&'static str>,
    pub output_classes: BTreeMap<i64, String>,
    pub encoding_maps: BTreeMap<&'static str, BTreeMap<&'static str, u8>>,
}

impl ModelInfoResponse {
    pub fn new(models: Vec<ModelDescription>, labels: &ClassLabels) -> Self {
        Self {
            models,
            features: FEATURE_ORDER.to_vec(),
            output_classes: labels
                .iter()
                .map(|(code, label)| (code.value(), label.to_string()))
                .collect(),
            encoding_maps: encoding_maps()
                .into_iter()
                .map(|map| (map.feature, map.values.into_iter().collect()))
                .collect(),
        }
    }
}
