//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema consumed by the classifier.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Model and scaler artifacts declare the layout they were fitted on and are
//! rejected at load if it differs.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const MODEL_FEATURES: &[&str] = &[
    // === Planet / orbit (0-5) ===
    "Radius",                  // 0: Earth radii
    "Mass",                    // 1: Earth masses
    "Period",                  // 2: Orbital period, days
    "SemiMajorAxis",           // 3: AU
    "EqTemp",                  // 4: Equilibrium temperature, K
    "Density",                 // 5: g/cm^3

    // === Host star (6-9) ===
    "StarTemp",                // 6: Effective temperature, K
    "StarLum",                 // 7: Solar luminosities
    "StarMet",                 // 8: Metallicity [Fe/H]
    "Insolation",              // 9: Earth flux units

    // === Derived (10-12) ===
    "Habitability_Score",      // 10
    "Stellar_Compatibility",   // 11
    "Orbital_Stability_Score", // 12

    // === One-hot star type (13-16) ===
    "Star_Type_G",             // 13
    "Star_Type_K",             // 14
    "Star_Type_M",             // 15
    "Star_Type_Other",         // 16
];

/// Total number of features
pub const FEATURE_COUNT: usize = 17;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the version and an ordered list of names
pub fn hash_names<S: AsRef<str>>(version: u8, names: &[S]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[version]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Hash of the current layout
pub fn layout_hash() -> u32 {
    hash_names(FEATURE_VERSION, MODEL_FEATURES)
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout summary for health output and logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
        }
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Artifact was fitted against a different feature list
#[derive(Debug, Clone, thiserror::Error)]
#[error("feature layout mismatch: expected {expected_count} features (hash {expected_hash:08x}), got {actual_count} (hash {actual_hash:08x})")]
pub struct LayoutMismatchError {
    pub expected_hash: u32,
    pub expected_count: usize,
    pub actual_hash: u32,
    pub actual_count: usize,
}

/// Validate feature names declared by an artifact
pub fn validate_layout<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    let actual_hash = hash_names(FEATURE_VERSION, names);

    if names.len() != FEATURE_COUNT || actual_hash != expected_hash {
        return Err(LayoutMismatchError {
            expected_hash,
            expected_count: FEATURE_COUNT,
            actual_hash,
            actual_count: names.len(),
        });
    }

    Ok(())
}

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    MODEL_FEATURES.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(MODEL_FEATURES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_names_unique() {
        for (i, name) in MODEL_FEATURES.iter().enumerate() {
            assert_eq!(feature_index(name), Some(i), "duplicate {name}");
        }
    }

    #[test]
    fn test_validate_layout_success() {
        let names: Vec<String> = MODEL_FEATURES.iter().map(|s| s.to_string()).collect();
        assert!(validate_layout(&names).is_ok());
    }

    #[test]
    fn test_validate_layout_order_mismatch() {
        let mut names: Vec<&str> = MODEL_FEATURES.to_vec();
        names.swap(0, 1);
        assert!(validate_layout(&names).is_err());
    }

    #[test]
    fn test_validate_layout_legacy_five_features() {
        let legacy = ["Radius", "Mass", "EqTemp", "Insolation", "Period"];
        let err = validate_layout(&legacy).unwrap_err();
        assert_eq!(err.actual_count, 5);
        assert_eq!(err.expected_count, FEATURE_COUNT);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("Radius"), Some(0));
        assert_eq!(feature_index("Star_Type_Other"), Some(16));
        assert_eq!(feature_index("Name"), None);
    }
}
