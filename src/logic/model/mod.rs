//! Model Module - classifier, scaler and decision rule
//!
//! Artifacts are JSON files checked against the feature layout at load.

pub mod artifact;
pub mod classifier;
pub mod scaler;
pub mod threshold;

pub use artifact::ArtifactError;
pub use classifier::{Classifier, ForestClassifier, ModelError, TreeNode};
pub use scaler::{Scaler, ScalingAdapter};
pub use threshold::{
    fallback_probability, is_habitable, round_confidence, sanitize_probability,
    HABITABLE_THRESHOLD,
};
