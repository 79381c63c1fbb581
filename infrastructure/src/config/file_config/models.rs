//! Model sources from TOML (`[[models]]` array)

use serde::{Deserialize, Serialize};

fn enabled_by_default() -> bool {
    true
}

/// One model entry: display name and artifact path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModelSource {
    /// Display name used in results and with `--model`
    pub name: String,
    /// Artifact path, relative to `models_dir` unless absolute
    pub path: String,
    /// Set to false to keep an entry without loading it
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl FileModelSource {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            enabled: true,
        }
    }

    /// The bundled SVM, Random Forest and Decision Tree models
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("SVM", "svm.json"),
            Self::new("Random Forest", "random_forest.json"),
            Self::new("Decision Tree", "decision_tree.json"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_models_deserialize() {
        let toml_str = r#"
[[models]]
name = "Logistic Regression"
path = "/opt/models/logreg.json"

[[models]]
name = "SVM"
path = "svm.json"
enabled = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.len(), 2);
        assert!(config.models[0].enabled);
        assert!(!config.models[1].enabled);
    }
}
