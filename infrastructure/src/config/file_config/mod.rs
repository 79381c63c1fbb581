//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod ensemble;
mod models;
mod output;

pub use ensemble::FileEnsembleConfig;
pub use models::FileModelSource;
pub use output::FileOutputConfig;

use crate::models::ModelSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use subtype_domain::{ConfigIssue, ConfigIssueCode};

/// Directory holding the bundled model artifacts
pub const DEFAULT_MODELS_DIR: &str = "model_v2";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base directory for relative model paths
    pub models_dir: String,
    /// Models to load, in registry order
    pub models: Vec<FileModelSource>,
    /// Ensemble settings
    pub ensemble: FileEnsembleConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            models_dir: DEFAULT_MODELS_DIR.to_string(),
            models: FileModelSource::defaults(),
            ensemble: FileEnsembleConfig::default(),
            output: FileOutputConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks for empty model names, duplicate names, empty paths and an
    /// empty set of enabled models.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (index, model) in self.models.iter().enumerate() {
            if model.name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName { index },
                    format!("models[{}]: model name cannot be empty", index),
                ));
                continue;
            }
            if !seen.insert(model.name.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateModelName {
                        name: model.name.clone(),
                    },
                    format!(
                        "model '{}' is defined more than once; the last entry wins",
                        model.name
                    ),
                ));
            }
            if model.path.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelPath {
                        name: model.name.clone(),
                    },
                    format!("model '{}': path cannot be empty", model.name),
                ));
            }
        }

        if !self.models.iter().any(|m| m.enabled) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoModelsConfigured,
                "no enabled models are configured",
            ));
        }

        issues
    }

    /// Enabled models with their paths resolved against `models_dir`
    pub fn model_sources(&self) -> Vec<ModelSource> {
        let base = Path::new(&self.models_dir);
        self.models
            .iter()
            .filter(|m| m.enabled)
            .map(|m| ModelSource::new(m.name.as_str(), resolve_path(base, &m.path)))
            .collect()
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
