//! Model registry
//!
//! An ordered name → classifier mapping, assembled once at startup and shared
//! read-only (behind an `Arc`) by every request afterwards.

use super::traits::Classifier;
use std::sync::Arc;

/// A classifier registered under a display name
#[derive(Clone)]
pub struct RegisteredModel {
    pub name: String,
    pub classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for RegisteredModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredModel")
            .field("name", &self.name)
            .field("kind", &self.classifier.kind())
            .finish()
    }
}

/// Ordered collection of named classifiers
///
/// Iteration follows registration order. Registering an existing name replaces
/// the classifier in place without changing its position.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<RegisteredModel>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Register a classifier (builder style)
    pub fn with_model(mut self, name: impl Into<String>, classifier: Arc<dyn Classifier>) -> Self {
        self.register(name, classifier);
        self
    }

    /// Register a classifier
    pub fn register(&mut self, name: impl Into<String>, classifier: Arc<dyn Classifier>) {
        let name = name.into();
        match self.models.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.classifier = classifier,
            None => self.models.push(RegisteredModel { name, classifier }),
        }
    }

    /// Look up a classifier by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Classifier>> {
        self.models
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.classifier)
    }

    /// Registered names in iteration order
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredModel> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{class_code::ClassCode, error::ClassifierError, features::FeatureTable};

    struct Constant(i64, &'static str);

    impl Classifier for Constant {
        fn kind(&self) -> &str {
            self.1
        }

        fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
            Ok(vec![ClassCode::new(self.0); features.n_rows()])
        }
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = ModelRegistry::new()
            .with_model("SVM", Arc::new(Constant(1, "svm")))
            .with_model("Random Forest", Arc::new(Constant(2, "forest")))
            .with_model("Decision Tree", Arc::new(Constant(3, "tree")));

        assert_eq!(registry.names(), vec!["SVM", "Random Forest", "Decision Tree"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_replace_keeps_position() {
        let registry = ModelRegistry::new()
            .with_model("a", Arc::new(Constant(1, "first")))
            .with_model("b", Arc::new(Constant(2, "second")))
            .with_model("a", Arc::new(Constant(9, "replaced")));

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().kind(), "replaced");
    }

    #[test]
    fn test_lookup_missing() {
        let registry = ModelRegistry::new();
        assert!(registry.get("SVM").is_none());
        assert!(registry.is_empty());
    }
}
