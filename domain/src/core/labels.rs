//! Class label mapping
//!
//! Maps class codes to human-readable subtype names. The mapping is built once
//! and shared immutably by the prediction engine and the consensus resolver.

use super::class_code::ClassCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label rendered for codes that are missing from the mapping
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Fixed integer-to-name table for output classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassLabels {
    labels: BTreeMap<ClassCode, String>,
}

impl ClassLabels {
    /// Build a mapping from `(code, label)` pairs
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self {
            labels: pairs
                .into_iter()
                .map(|(code, label)| (ClassCode::new(code), label.into()))
                .collect(),
        }
    }

    /// The five detailed breast-cancer subtypes the bundled models predict
    pub fn cancer_subtypes() -> Self {
        Self::new([
            (0, "Breast"),
            (1, "Breast Invasive Ductal Carcinoma"),
            (2, "Breast Invasive Lobular Carcinoma"),
            (3, "Breast Invasive Mixed Mucinous Carcinoma"),
            (4, "Breast Mixed Ductal and Lobular Carcinoma"),
        ])
    }

    /// Human label for a predicted code, `"Unknown"` when unmapped
    pub fn label(&self, code: ClassCode) -> &str {
        self.labels
            .get(&code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Key for the `index`-th column of a probability distribution
    ///
    /// Falls back to `"Class {index}"` so that every column keeps a distinct key.
    pub fn probability_key(&self, index: usize) -> String {
        self.labels
            .get(&ClassCode::new(index as i64))
            .cloned()
            .unwrap_or_else(|| format!("Class {}", index))
    }

    /// Iterate over `(code, label)` pairs in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (ClassCode, &str)> {
        self.labels.iter().map(|(code, label)| (*code, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for ClassLabels {
    fn default() -> Self {
        Self::cancer_subtypes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_label() {
        let labels = ClassLabels::cancer_subtypes();
        assert_eq!(
            labels.label(ClassCode::new(1)),
            "Breast Invasive Ductal Carcinoma"
        );
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_unknown_and_sentinel_labels() {
        let labels = ClassLabels::cancer_subtypes();
        assert_eq!(labels.label(ClassCode::new(42)), "Unknown");
        assert_eq!(labels.label(ClassCode::UNKNOWN), "Unknown");
    }

    #[test]
    fn test_probability_key_fallback() {
        let labels = ClassLabels::new([(0, "A"), (1, "B")]);
        assert_eq!(labels.probability_key(1), "B");
        assert_eq!(labels.probability_key(2), "Class 2");
    }

    #[test]
    fn test_iter_is_ordered() {
        let labels = ClassLabels::new([(2, "C"), (0, "A"), (1, "B")]);
        let codes: Vec<i64> = labels.iter().map(|(c, _)| c.value()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }
}
