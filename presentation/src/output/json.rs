//! JSON output formatter

use super::formatter::OutputFormatter;
use super::response::{EnsembleResponse, ModelInfoResponse, PredictionResponse};
use serde::Serialize;
use subtype_domain::{EnsembleReport, PredictionRecord};

/// Formats prediction results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &EnsembleReport) -> String {
        Self::to_json(&EnsembleResponse::from(report))
    }

    fn format_summary(&self, report: &EnsembleReport) -> String {
        match &report.consensus {
            Some(consensus) => Self::to_json(consensus),
            None => self.format(report),
        }
    }

    fn format_prediction(&self, record: &PredictionRecord) -> String {
        Self::to_json(&PredictionResponse::from(record))
    }

    fn format_model_info(&self, info: &ModelInfoResponse) -> String {
        Self::to_json(info)
    }
}
