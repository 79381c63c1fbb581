//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for prediction results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every model's prediction plus the consensus (default)
    #[default]
    Full,
    /// Only the consensus answer
    Summary,
    /// JSON output
    Json,
}
