//! Output formatter trait

use super::response::ModelInfoResponse;
use subtype_domain::{EnsembleReport, PredictionRecord};

/// Trait for formatting prediction results
pub trait OutputFormatter {
    /// Format every prediction plus the consensus
    fn format(&self, report: &EnsembleReport) -> String;

    /// Format the consensus only (concise output)
    fn format_summary(&self, report: &EnsembleReport) -> String;

    /// Format a single model's prediction
    fn format_prediction(&self, record: &PredictionRecord) -> String;

    /// Format the model catalogue
    fn format_model_info(&self, info: &ModelInfoResponse) -> String;
}
