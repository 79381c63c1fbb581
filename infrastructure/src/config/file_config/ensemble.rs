//! Ensemble configuration from TOML (`[ensemble]` section)

use serde::{Deserialize, Serialize};

/// Raw ensemble configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnsembleConfig {
    /// Run models concurrently
    pub parallel: bool,
    /// Resolve a consensus across the predictions
    pub consensus: bool,
}

impl Default for FileEnsembleConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            consensus: true,
        }
    }
}
