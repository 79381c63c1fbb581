//! Decision tree and random forest classifiers
//!
//! Trees are stored as flat node arrays. An internal node sends a row left
//! when `row[feature] <= threshold`; a leaf holds per-class sample weights.

use super::check_features;
use super::math::{argmax, normalize};
use serde::{Deserialize, Serialize};
use subtype_domain::{ClassCode, Classifier, ClassifierError, FeatureTable};

/// One node of a fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Split feature; absent on leaves
    #[serde(default)]
    pub feature: Option<usize>,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub left: Option<usize>,
    #[serde(default)]
    pub right: Option<usize>,
    /// Per-class sample weights reaching this node
    #[serde(default)]
    pub value: Vec<f64>,
}

impl TreeNode {
    fn children(&self) -> Option<(usize, usize)> {
        self.left.zip(self.right)
    }
}

/// Node array of one fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeStructure {
    pub nodes: Vec<TreeNode>,
}

impl TreeStructure {
    /// Check node references and leaf values
    ///
    /// Children must come after their parent, which rules out cycles.
    fn validate(&self, n_classes: usize, n_features: usize) -> Result<(), ClassifierError> {
        let malformed = |msg: String| Err(ClassifierError::MalformedModel(msg));

        if self.nodes.is_empty() {
            return malformed("tree has no nodes".to_string());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match (node.feature, node.children()) {
                (Some(feature), Some((left, right))) => {
                    if feature >= n_features {
                        return malformed(format!(
                            "node {} splits on feature {} of {}",
                            index, feature, n_features
                        ));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return malformed(format!(
                                "node {} references invalid child {}",
                                index, child
                            ));
                        }
                    }
                }
                (None, None) => {
                    if node.value.len() != n_classes {
                        return malformed(format!(
                            "leaf {} has {} values for {} classes",
                            index,
                            node.value.len(),
                            n_classes
                        ));
                    }
                    if node.value.iter().any(|v| !v.is_finite() || *v < 0.0)
                        || node.value.iter().sum::<f64>() <= 0.0
                    {
                        return malformed(format!("leaf {} has invalid weights", index));
                    }
                }
                _ => return malformed(format!("node {} is neither a split nor a leaf", index)),
            }
        }
        Ok(())
    }

    /// Class probabilities of the leaf reached by `row`
    fn leaf_probabilities(&self, row: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        let mut index = 0;
        loop {
            let node = self.nodes.get(index).ok_or_else(|| {
                ClassifierError::MalformedModel(format!("missing node {}", index))
            })?;
            match (node.feature, node.children()) {
                (Some(feature), Some((left, right))) => {
                    let value = row.get(feature).copied().unwrap_or(f64::NAN);
                    index = if value <= node.threshold { left } else { right };
                }
                _ => return Ok(normalize(&node.value)),
            }
        }
    }
}

/// A single decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub classes: Vec<ClassCode>,
    pub n_features: usize,
    #[serde(flatten)]
    pub tree: TreeStructure,
}

impl DecisionTree {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        validate_classes(&self.classes)?;
        self.tree.validate(self.classes.len(), self.n_features)
    }
}

impl Classifier for DecisionTree {
    fn kind(&self) -> &str {
        "decision_tree"
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        pick_classes(&self.classes, self.predict_proba(features)?)
    }

    fn has_predict_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        check_features(features, self.n_features)?;
        features
            .rows()
            .iter()
            .map(|row| self.tree.leaf_probabilities(row))
            .collect()
    }
}

/// Bagged ensemble of trees; probabilities are the mean over trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub classes: Vec<ClassCode>,
    pub n_features: usize,
    pub trees: Vec<TreeStructure>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        validate_classes(&self.classes)?;
        if self.trees.is_empty() {
            return Err(ClassifierError::MalformedModel(
                "forest has no trees".to_string(),
            ));
        }
        self.trees
            .iter()
            .try_for_each(|tree| tree.validate(self.classes.len(), self.n_features))
    }
}

impl Classifier for RandomForest {
    fn kind(&self) -> &str {
        "random_forest"
    }

    fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
        pick_classes(&self.classes, self.predict_proba(features)?)
    }

    fn has_predict_proba(&self) -> bool {
        true
    }

    fn predict_proba(&self, features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
        check_features(features, self.n_features)?;
        let n_trees = self.trees.len() as f64;

        features
            .rows()
            .iter()
            .map(|row| {
                let mut mean = vec![0.0; self.classes.len()];
                for tree in &self.trees {
                    for (acc, p) in mean.iter_mut().zip(tree.leaf_probabilities(row)?) {
                        *acc += p / n_trees;
                    }
                }
                Ok(mean)
            })
            .collect()
    }
}

fn validate_classes(classes: &[ClassCode]) -> Result<(), ClassifierError> {
    if classes.is_empty() {
        return Err(ClassifierError::MalformedModel("no classes".to_string()));
    }
    Ok(())
}

fn pick_classes(
    classes: &[ClassCode],
    probabilities: Vec<Vec<f64>>,
) -> Result<Vec<ClassCode>, ClassifierError> {
    probabilities
        .iter()
        .map(|row| {
            argmax(row)
                .and_then(|i| classes.get(i).copied())
                .ok_or(ClassifierError::EmptyOutput)
        })
        .collect()
}
