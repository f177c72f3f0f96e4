//! Classifier - opaque "predict probability" seam
//!
//! The service only needs the positive-class probability. The shipped
//! implementation is a tree ensemble deserialized from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::artifact::{read_json, write_json, ArtifactError};
use crate::logic::features::{validate_layout, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("split references feature {index}, vector has {count}")]
    FeatureOutOfRange { index: usize, count: usize },

    #[error("model has no trees")]
    Empty,
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Anything that scores a (scaled) feature vector
pub trait Classifier: Send + Sync {
    /// Probability of the habitable class
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, ModelError>;

    fn name(&self) -> &str;
}

// ============================================================================
// TREE ENSEMBLE
// ============================================================================

/// Decision tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf holding the habitable-class probability
    Leaf { value: f64 },
    /// `features[feature_idx] <= threshold` goes left
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn evaluate(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split { feature_idx, threshold, left, right } => {
                    let value = features.get(*feature_idx).ok_or(ModelError::FeatureOutOfRange {
                        index: *feature_idx,
                        count: features.len(),
                    })?;
                    node = if *value <= *threshold { &**left } else { &**right };
                }
            }
        }
    }
}

/// Forest artifact, probability is the mean leaf value across trees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestClassifier {
    pub name: String,
    pub feature_names: Vec<String>,
    pub trees: Vec<TreeNode>,
}

impl ForestClassifier {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let forest: Self = read_json(path)?;
        validate_layout(&forest.feature_names)?;
        if forest.trees.is_empty() {
            return Err(ArtifactError::Invalid(ModelError::Empty.to_string()));
        }
        Ok(forest)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        write_json(path, self)
    }
}

impl Classifier for ForestClassifier {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Empty);
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::MODEL_FEATURES;

    fn leaf(value: f64) -> Box<TreeNode> {
        Box::new(TreeNode::Leaf { value })
    }

    /// Radius (column 0) split at 1.4
    fn radius_stump(low: f64, high: f64) -> TreeNode {
        TreeNode::Split { feature_idx: 0, threshold: 1.4, left: leaf(low), right: leaf(high) }
    }

    fn forest(trees: Vec<TreeNode>) -> ForestClassifier {
        ForestClassifier {
            name: "Random Forest".to_string(),
            feature_names: MODEL_FEATURES.iter().map(|s| s.to_string()).collect(),
            trees,
        }
    }

    #[test]
    fn test_mean_of_trees() {
        let model = forest(vec![radius_stump(0.8, 0.2), radius_stump(0.6, 0.0)]);
        let mut features = [0.0; FEATURE_COUNT];

        features[0] = 1.0;
        assert!((model.predict_proba(&features).unwrap() - 0.7).abs() < 1e-12);

        features[0] = 2.0;
        assert!((model.predict_proba(&features).unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_split_is_error() {
        let bad = TreeNode::Split { feature_idx: 99, threshold: 0.0, left: leaf(1.0), right: leaf(0.0) };
        let model = forest(vec![bad]);
        let err = model.predict_proba(&[0.0; FEATURE_COUNT]).unwrap_err();
        assert!(matches!(err, ModelError::FeatureOutOfRange { index: 99, .. }));
    }

    #[test]
    fn test_empty_forest_is_error() {
        assert!(matches!(forest(vec![]).predict_proba(&[0.0; FEATURE_COUNT]), Err(ModelError::Empty)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random_forest.json");
        forest(vec![radius_stump(0.9, 0.1)]).save(&path).unwrap();

        let loaded = ForestClassifier::load(&path).unwrap();
        assert_eq!(loaded.name(), "Random Forest");
        assert_eq!(loaded.trees.len(), 1);
    }

    #[test]
    fn test_load_rejects_empty_forest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        forest(vec![]).save(&path).unwrap();
        assert!(matches!(ForestClassifier::load(&path), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ForestClassifier::load(Path::new("/nonexistent/model.json"));
        assert!(matches!(result, Err(ArtifactError::NotFound(_))));
    }
}
