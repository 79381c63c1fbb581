//! Linear classifiers: logistic regression and linear SVM
//!
//! Both share one decision function, `intercept[k] + coef[k] · x`. A binary
//! model stores a single coefficient row whose positive side is `classes[1]`.

use super::check_features;
use super::math::{argmax, dot, sigmoid, softmax};
use serde::{Deserialize, Serialize};
use subtype_domain::{ClassCode, Classifier, ClassifierError, FeatureTable};

/// Fitted weights of a linear decision function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    pub classes: Vec<ClassCode>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LinearWeights {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let malformed = |msg: String| Err(ClassifierError::MalformedModel(msg));

        if self.classes.len() < 2 {
            return malformed(format!("expected at least 2 classes, got {}", self.classes.len()));
        }
        let binary = self.classes.len() == 2 && self.coef.len() == 1;
        if !binary && self.coef.len() != self.classes.len() {
            return malformed(format!(
                "{} coefficient rows for {} classes",
                self.coef.len(),
                self.classes.len()
            ));
        }
        if self.intercept.len() != self.coef.len() {
            return malformed(format!(
                "{} intercepts for {} coefficient rows",
                self.intercept.len(),
                self.coef.len()
            ));
        }
        let n_features = self.n_features();
        if n_features == 0 || self.coef.iter().any(|row| row.len() != n_features) {
            return malformed("coefficient rows must be non-empty and equally long".to_string());
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn is_binary(&self) -> bool {
        self.coef.len() == 1
    }

    fn scores(&self, row: &[f64]) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| bias + dot(weights, row))
            .collect()
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        check_features(features, self.n_features())?;
        features
            .rows()
            .iter()
            .map(|row| {
                let scores = self.scores(row);
                let index = if self.is_binary() {
                    usize::from(scores[0] > 0.0)
                } else {
                    argmax(&scores).ok_or(ClassifierError::EmptyOutput)?
                };
                Ok(self.classes[index])
            })
            .collect()
    }

    fn probabilities(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        check_features(features, self.n_features())?;
        Ok(features
            .rows()
            .iter()
            .map(|row| {
                let scores = self.scores(row);
                if self.is_binary() {
                    let positive = sigmoid(scores[0]);
                    vec![1.0 - positive, positive]
                } else {
                    softmax(&scores)
                }
            })
            .collect())
    }
}

/// Multinomial (or binary) logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    #[serde(flatten)]
    pub weights: LinearWeights,
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &str {
        "logistic_regression"
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        self.weights.predict(features)
    }

    fn has_predict_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        self.weights.probabilities(features)
    }
}

/// Linear support vector classifier
///
/// Probability output exists only when the model was fitted with
/// `probability = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSvm {
    #[serde(flatten)]
    pub weights: LinearWeights,
    #[serde(default)]
    pub probability: bool,
}

impl Classifier for LinearSvm {
    fn kind(&self) -> &str {
        "linear_svm"
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        self.weights.predict(features)
    }

    fn has_predict_proba(&self) -> bool {
        self.probability
    }

    fn predict_proba(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        if !self.probability {
            return Err(ClassifierError::ProbabilityUnsupported(self.kind().to_string()));
        }
        self.weights.probabilities(features)
    }
}
