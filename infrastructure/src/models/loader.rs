//! Model registry loading
//!
//! Reads each configured artifact from disk and registers it under its
//! display name. A model that cannot be loaded is logged and left out, so
//! one broken file never prevents the others from serving.

use super::ModelArtifact;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use subtype_domain::{Classifier, ClassifierError, ModelRegistry};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a model artifact
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ClassifierError,
    },
}

/// A model to load: display name and artifact path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    pub name: String,
    pub path: PathBuf,
}

impl ModelSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Builds a [`ModelRegistry`] from artifacts on disk
pub struct ModelRegistryLoader;

impl ModelRegistryLoader {
    /// Load and validate one artifact
    pub fn load_artifact(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let classifier = artifact
            .into_classifier()
            .map_err(|source| ArtifactError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Arc::from(classifier))
    }

    /// Load every source in order, skipping the ones that fail
    pub fn load(sources: &[ModelSource]) -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        for source in sources {
            match Self::load_artifact(&source.path) {
                Ok(classifier) => {
                    info!(
                        "Loaded model {} ({}) from {}",
                        source.name,
                        classifier.kind(),
                        source.path.display()
                    );
                    registry.register(source.name.clone(), classifier);
                }
                Err(e) => warn!("Skipping model {}: {}", source.name, e),
            }
        }
        registry
    }
}
