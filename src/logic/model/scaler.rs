//! Scaling Adapter
//!
//! Fitted affine transform `(x - center) / scale` per column. When no scaler
//! could be loaded the adapter passes vectors through unscaled.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::artifact::{read_json, write_json, ArtifactError};
use crate::logic::features::{validate_layout, FeatureVector, FEATURE_COUNT, MODEL_FEATURES};

/// Fitted scaler artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub feature_names: Vec<String>,
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    /// Population mean / standard deviation per column.
    /// Zero or non-finite spread is stored as 1.
    pub fn fit(vectors: &[FeatureVector]) -> Result<Self, ArtifactError> {
        if vectors.is_empty() {
            return Err(ArtifactError::Invalid("cannot fit scaler on zero rows".into()));
        }

        let n = vectors.len() as f64;
        let mut center = vec![0.0; FEATURE_COUNT];
        for vector in vectors {
            for (c, v) in center.iter_mut().zip(vector.values()) {
                *c += v / n;
            }
        }

        let mut scale = vec![0.0; FEATURE_COUNT];
        for vector in vectors {
            for ((s, v), c) in scale.iter_mut().zip(vector.values()).zip(&center) {
                *s += (v - c).powi(2) / n;
            }
        }
        for s in scale.iter_mut() {
            *s = s.sqrt();
            if *s == 0.0 || !s.is_finite() {
                *s = 1.0;
            }
        }

        Ok(Self {
            feature_names: MODEL_FEATURES.iter().map(|s| s.to_string()).collect(),
            center,
            scale,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let scaler: Self = read_json(path)?;
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        write_json(path, self)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        validate_layout(&self.feature_names)?;

        if self.center.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::Invalid(format!(
                "scaler expects {} columns, has center={} scale={}",
                FEATURE_COUNT,
                self.center.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ArtifactError::Invalid("scaler has zero or non-finite scale".into()));
        }
        Ok(())
    }

    pub fn transform(&self, vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = *vector.values();
        for ((x, c), s) in out.iter_mut().zip(&self.center).zip(&self.scale) {
            *x = (*x - c) / s;
        }
        out
    }
}

/// Scaler if one was loaded, identity otherwise
#[derive(Debug, Clone, Default)]
pub struct ScalingAdapter {
    scaler: Option<Scaler>,
}

impl ScalingAdapter {
    pub fn new(scaler: Option<Scaler>) -> Self {
        Self { scaler }
    }

    /// Load the scaler, degrading to passthrough on any failure
    pub fn load_or_passthrough(path: &Path) -> Self {
        match Scaler::load(path) {
            Ok(scaler) => {
                tracing::info!("Scaler loaded from {}", path.display());
                Self::new(Some(scaler))
            }
            Err(e) => {
                tracing::warn!("Scaler unavailable ({}), features will not be scaled", e);
                Self::new(None)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.scaler.is_some()
    }

    pub fn apply(&self, vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
        match &self.scaler {
            Some(scaler) => scaler.transform(vector),
            None => *vector.values(),
        }
    }
}
