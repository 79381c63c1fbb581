//! Feature preprocessing steps

use serde::{Deserialize, Serialize};
use subtype_domain::{ClassifierError, FeatureTable};

/// Standardizes each column as `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.mean.is_empty() || self.mean.len() != self.scale.len() {
            return Err(ClassifierError::MalformedModel(format!(
                "scaler has {} means and {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ClassifierError::MalformedModel(
                "scaler has a zero or non-finite scale".to_string(),
            ));
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, features: &FeatureTable) -> Result<FeatureTable, ClassifierError> {
        super::check_features(features, self.n_features())?;
        Ok(features.map_rows(|row| {
            row.iter()
                .zip(self.mean.iter().zip(&self.scale))
                .map(|(x, (mean, scale))| (x - mean) / scale)
                .collect()
        }))
    }
}
