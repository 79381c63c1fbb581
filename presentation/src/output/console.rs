//! Console output formatter for prediction results

use super::formatter::OutputFormatter;
use super::response::{ModelInfoResponse, round4};
use colored::Colorize;
use subtype_domain::{ConsensusSummary, EnsembleReport, PredictionRecord};

const NAME_WIDTH: usize = 16;

/// Formats prediction results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every prediction plus the consensus
    pub fn format(report: &EnsembleReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Subtype Predictions"));
        output.push('\n');

        output.push_str(&Self::section_header("Model Predictions"));
        for record in &report.predictions {
            output.push_str(&Self::prediction_block(record));
        }

        if !report.failed_models.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Failed:".red().bold(),
                report.failed_models.join(", ")
            ));
        }

        if let Some(consensus) = &report.consensus {
            output.push_str(&Self::section_header("Consensus"));
            output.push_str(&Self::consensus_block(consensus));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format the consensus only (concise output)
    pub fn format_summary(report: &EnsembleReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Subtype Consensus ===".cyan().bold()
        ));

        output.push_str(&format!(
            "{} {}\n\n",
            "Models consulted:".dimmed(),
            report.model_names().join(", ")
        ));

        match &report.consensus {
            Some(consensus) => output.push_str(&Self::consensus_block(consensus)),
            None => {
                for record in &report.predictions {
                    output.push_str(&format!(
                        "{:<width$} {}\n",
                        record.model_name(),
                        record.class_label(),
                        width = NAME_WIDTH
                    ));
                }
            }
        }

        output
    }

    /// Format a single model's prediction
    pub fn format_prediction(record: &PredictionRecord) -> String {
        let mut output = Self::section_header("Prediction");
        output.push_str(&Self::prediction_block(record));
        output
    }

    /// Format the model catalogue
    pub fn format_model_info(info: &ModelInfoResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Model Information"));
        output.push('\n');

        output.push_str(&Self::section_header("Models"));
        if info.models.is_empty() {
            output.push_str(&format!("  {}\n", "no models loaded".red()));
        }
        for model in &info.models {
            output.push_str(&format!(
                "  {:<width$} {:<20} probabilities: {}\n",
                model.name.yellow().bold(),
                model.kind,
                model.probability,
                width = NAME_WIDTH
            ));
        }

        output.push_str(&Self::section_header("Features (in order)"));
        for (index, feature) in info.features.iter().enumerate() {
            output.push_str(&format!("  {:>2}. {}\n", index + 1, feature));
        }

        output.push_str(&Self::section_header("Output Classes"));
        for (code, label) in &info.output_classes {
            output.push_str(&format!("  {} {}\n", code, label));
        }

        output.push_str(&Self::section_header("Encodings"));
        for (feature, values) in &info.encoding_maps {
            let pairs: Vec<String> = values
                .iter()
                .map(|(value, code)| format!("{}={}", value, code))
                .collect();
            output.push_str(&format!("  {}: {}\n", feature.cyan(), pairs.join(", ")));
        }

        output.push_str(&Self::footer());
        output
    }

    fn prediction_block(record: &PredictionRecord) -> String {
        let mut output = format!(
            "\n  {:<width$} {} ({})",
            record.model_name().yellow().bold(),
            record.class_label(),
            record.class_code(),
            width = NAME_WIDTH
        );

        match record.confidence() {
            Some(confidence) => {
                output.push_str(&format!("  {}\n", Self::percent(confidence).green()))
            }
            None => output.push_str(&format!("  {}\n", "no confidence".dimmed())),
        }

        if let Some(probabilities) = record.probabilities() {
            for (label, p) in probabilities.iter() {
                output.push_str(&format!("      {:<44} {}\n", label, Self::percent(p)));
            }
        }

        output
    }

    fn consensus_block(consensus: &ConsensusSummary) -> String {
        if consensus.is_no_data() {
            return format!("  {}\n", "No predictions to vote on".red());
        }

        let agreement = if consensus.agreement {
            "unanimous".green()
        } else {
            "split".yellow()
        };

        format!(
            "  {} ({})\n  Votes: {}/{} ({}), {}\n",
            consensus.class_label.bold(),
            consensus.class_code,
            consensus.vote_count,
            consensus.total_models,
            consensus.resolution,
            agreement
        )
    }

    fn percent(value: f64) -> String {
        format!("{:.2}%", round4(value) * 100.0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &EnsembleReport) -> String {
        Self::format(report)
    }

    fn format_summary(&self, report: &EnsembleReport) -> String {
        Self::format_summary(report)
    }

    fn format_prediction(&self, record: &PredictionRecord) -> String {
        Self::format_prediction(record)
    }

    fn format_model_info(&self, info: &ModelInfoResponse) -> String {
        Self::format_model_info(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtype_domain::{ClassCode, ClassLabels, ProbabilityDistribution};

    fn report() -> EnsembleReport {
        let labels = ClassLabels::cancer_subtypes();
        let dist = ProbabilityDistribution::new(vec![0.15, 0.85]).unwrap();
        let records = vec![
            PredictionRecord::new("SVM", ClassCode::new(1), &labels),
            PredictionRecord::new("Random Forest", ClassCode::new(1), &labels)
                .with_distribution(&dist, &labels),
        ];
        EnsembleReport::new(records.clone())
            .with_consensus(ConsensusSummary::resolve(&records, &labels))
            .with_failed_models(vec!["Decision Tree".to_string()])
    }

    #[test]
    fn test_full_output_lists_models_and_consensus() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&report());

        assert!(output.contains("SVM"));
        assert!(output.contains("no confidence"));
        assert!(output.contains("85.00%"));
        assert!(output.contains("Failed: Decision Tree"));
        assert!(output.contains("Votes: 2/2 (majority vote), unanimous"));
    }

    #[test]
    fn test_summary_output() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&report());

        assert!(output.contains("Models consulted: SVM, Random Forest"));
        assert!(output.contains("Breast Invasive Ductal Carcinoma (1)"));
        assert!(!output.contains("15.00%"));
    }

    #[test]
    fn test_no_data_consensus() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::consensus_block(&ConsensusSummary::no_data());
        assert!(output.contains("No predictions"));
    }
}
