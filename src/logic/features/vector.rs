//! Feature Vector - Model input in declared layout order
//!
//! Uses centralized layout from `layout.rs` for:
//! - Consistent feature ordering
//! - Version tracking
//! - Layout hash for compatibility checks

use serde::{Deserialize, Serialize};

use super::engineer::FeatureMap;
use super::layout::{feature_index, layout_hash, FEATURE_COUNT, FEATURE_VERSION, MODEL_FEATURES};

/// Versioned feature vector, immutable once assembled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    version: u8,
    layout_hash: u32,
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Select `MODEL_FEATURES` from the mapping in declared order.
    /// Absent columns are zero, extra entries are dropped.
    pub fn assemble(features: &FeatureMap) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(MODEL_FEATURES) {
            *slot = features.get(*name).copied().unwrap_or(0.0);
        }
        Self::from_values(values)
    }

    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn layout_hash(&self) -> u32 {
        self.layout_hash
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }

    /// `(name, value)` pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        MODEL_FEATURES.iter().copied().zip(self.values.iter().copied())
    }
}
