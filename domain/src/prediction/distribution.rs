//! Validated class-probability distribution

use crate::core::error::ClassifierError;
use crate::core::labels::ClassLabels;
use serde::ser::{Serialize, SerializeMap, Serializer};

const TOLERANCE: f64 = 1e-9;

/// One row of `predict_proba` output, indexed by class position
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    values: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Validate a raw probability row
    ///
    /// Rejects empty rows and values that are non-finite or outside `[0, 1]`.
    pub fn new(values: Vec<f64>) -> Result<Self, ClassifierError> {
        if values.is_empty() {
            return Err(ClassifierError::InvalidDistribution(
                "empty distribution".to_string(),
            ));
        }
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < -TOLERANCE || **v > 1.0 + TOLERANCE)
        {
            return Err(ClassifierError::InvalidDistribution(format!(
                "value {} at index {} is not a probability",
                v, i
            )));
        }
        Ok(Self {
            values: values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect(),
        })
    }

    /// Highest class probability
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Key each probability by class label, keeping column order
    ///
    /// Unmapped columns, and columns whose label is already taken by an
    /// earlier column, are keyed `"Class {i}"`.
    pub fn labelled(&self, labels: &ClassLabels) -> ClassProbabilities {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(self.values.len());
        for (i, p) in self.values.iter().enumerate() {
            let mut key = labels.probability_key(i);
            if entries.iter().any(|(existing, _)| *existing == key) {
                key = format!("Class {}", i);
            }
            entries.push((key, *p));
        }
        ClassProbabilities { entries }
    }
}

/// Labelled class probabilities in column order
///
/// Serializes as a JSON object whose keys follow the column order of the
/// model output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassProbabilities {
    entries: Vec<(String, f64)>,
}

impl ClassProbabilities {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, p)| (key.as_str(), *p))
    }

    /// Apply `f` to every probability, keeping the keys
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(key, p)| (key.clone(), f(*p)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ClassProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, p) in &self.entries {
            map.serialize_entry(key, p)?;
        }
        map.end()
    }
}
