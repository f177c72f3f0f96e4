//! Feature Engineering
//!
//! Turns a raw caller payload into sanitized planet inputs, then into the
//! raw-plus-derived feature mapping consumed by vector assembly. Shared by the
//! live `/predict` path and the offline generator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coerce::{coerce, Coerced};

// ============================================================================
// DEFAULTS & REFERENCE VALUES
// ============================================================================

pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_EQ_TEMP: f64 = 288.0;
pub const DEFAULT_INSOLATION: f64 = 1.0;
pub const DEFAULT_PERIOD: f64 = 365.0;
pub const DEFAULT_SEMI_MAJOR_AXIS: f64 = 1.0;
pub const DEFAULT_DENSITY: f64 = 5.51;
pub const DEFAULT_STAR_TEMP: f64 = 5778.0;
pub const DEFAULT_STAR_LUM: f64 = 1.0;
pub const DEFAULT_STAR_MET: f64 = 0.0;

/// Earth equilibrium temperature (K)
const EARTH_EQ_TEMP: f64 = 288.0;
/// Sun effective temperature (K)
const SUN_TEMP: f64 = 5778.0;
const STAR_TEMP_SCALE: f64 = 1000.0;

/// Caller payload, a JSON object of arbitrary values
pub type RawInput = Map<String, Value>;

/// Raw-plus-derived features keyed by column name
pub type FeatureMap = HashMap<String, f64>;

// ============================================================================
// STAR TYPE
// ============================================================================

/// Spectral class bucket used for one-hot encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarType {
    G,
    K,
    M,
    Other,
}

impl StarType {
    /// First character of the value's string form, uppercased.
    /// Missing, null and empty values default to G.
    pub fn from_value(value: Option<&Value>) -> Self {
        let text = match value {
            None | Some(Value::Null) => return StarType::G,
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        match text.chars().next() {
            None => StarType::G,
            Some(c) => Self::from_letter(c),
        }
    }

    pub fn from_letter(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'G' => StarType::G,
            'K' => StarType::K,
            'M' => StarType::M,
            _ => StarType::Other,
        }
    }

    /// `(Star_Type_G, Star_Type_K, Star_Type_M, Star_Type_Other)`
    pub fn one_hot(self) -> [f64; 4] {
        match self {
            StarType::G => [1.0, 0.0, 0.0, 0.0],
            StarType::K => [0.0, 1.0, 0.0, 0.0],
            StarType::M => [0.0, 0.0, 1.0, 0.0],
            StarType::Other => [0.0, 0.0, 0.0, 1.0],
        }
    }
}

// ============================================================================
// SANITIZED INPUTS
// ============================================================================

/// Every numeric field after coercion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetInputs {
    pub radius: f64,
    pub mass: f64,
    pub period: f64,
    pub semi_major_axis: f64,
    pub eq_temp: f64,
    pub density: f64,
    pub star_temp: f64,
    pub star_lum: f64,
    pub star_met: f64,
    pub insolation: f64,
    pub star_type: StarType,
}

impl Default for PlanetInputs {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            mass: DEFAULT_MASS,
            period: DEFAULT_PERIOD,
            semi_major_axis: DEFAULT_SEMI_MAJOR_AXIS,
            eq_temp: DEFAULT_EQ_TEMP,
            density: DEFAULT_DENSITY,
            star_temp: DEFAULT_STAR_TEMP,
            star_lum: DEFAULT_STAR_LUM,
            star_met: DEFAULT_STAR_MET,
            insolation: DEFAULT_INSOLATION,
            star_type: StarType::G,
        }
    }
}

impl PlanetInputs {
    /// Sanitize a caller payload. Returns the inputs plus the names of the
    /// fields that fell back to their default.
    pub fn from_raw(raw: &RawInput) -> (Self, Vec<&'static str>) {
        let mut defaulted = Vec::new();
        let mut field = |name: &'static str, default: f64| -> f64 {
            let coerced = coerce(raw.get(name), default);
            if let Coerced::Defaulted(_) = coerced {
                defaulted.push(name);
            }
            coerced.value()
        };

        let inputs = Self {
            radius: field("Radius", DEFAULT_RADIUS),
            mass: field("Mass", DEFAULT_MASS),
            period: field("Period", DEFAULT_PERIOD),
            semi_major_axis: field("SemiMajorAxis", DEFAULT_SEMI_MAJOR_AXIS),
            eq_temp: field("EqTemp", DEFAULT_EQ_TEMP),
            density: field("Density", DEFAULT_DENSITY),
            star_temp: field("StarTemp", DEFAULT_STAR_TEMP),
            star_lum: field("StarLum", DEFAULT_STAR_LUM),
            star_met: field("StarMet", DEFAULT_STAR_MET),
            insolation: field("Insolation", DEFAULT_INSOLATION),
            star_type: StarType::from_value(raw.get("StarType")),
        };

        (inputs, defaulted)
    }

    pub fn habitability_score(&self) -> f64 {
        habitability_score(self.radius, self.eq_temp, self.insolation)
    }

    pub fn stellar_compatibility(&self) -> f64 {
        stellar_compatibility(self.star_temp)
    }

    pub fn orbital_stability_score(&self) -> f64 {
        orbital_stability_score(self.period, self.semi_major_axis)
    }

    /// Raw columns plus derived scores and one-hot star type
    pub fn engineer(&self) -> FeatureMap {
        let [g, k, m, other] = self.star_type.one_hot();

        [
            ("Radius", self.radius),
            ("Mass", self.mass),
            ("Period", self.period),
            ("SemiMajorAxis", self.semi_major_axis),
            ("EqTemp", self.eq_temp),
            ("Density", self.density),
            ("StarTemp", self.star_temp),
            ("StarLum", self.star_lum),
            ("StarMet", self.star_met),
            ("Insolation", self.insolation),
            ("Habitability_Score", self.habitability_score()),
            ("Stellar_Compatibility", self.stellar_compatibility()),
            ("Orbital_Stability_Score", self.orbital_stability_score()),
            ("Star_Type_G", g),
            ("Star_Type_K", k),
            ("Star_Type_M", m),
            ("Star_Type_Other", other),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
    }
}

// ============================================================================
// DERIVED SCORES
// ============================================================================

/// Mean closeness to Earth in radius, temperature and insolation, in (0, 1]
pub fn habitability_score(radius: f64, eq_temp: f64, insolation: f64) -> f64 {
    let radius_term = (-(radius - 1.0).abs()).exp();
    let temp_term = (-((eq_temp - EARTH_EQ_TEMP) / EARTH_EQ_TEMP).abs()).exp();
    let flux_term = (-(insolation - 1.0).abs()).exp();
    (radius_term + temp_term + flux_term) / 3.0
}

/// Closeness of the host star to a Sun-like temperature, in (0, 1]
pub fn stellar_compatibility(star_temp: f64) -> f64 {
    (-((star_temp - SUN_TEMP) / STAR_TEMP_SCALE).abs()).exp()
}

/// `ln(1 + period * semi_major_axis)` with the product clamped at zero
pub fn orbital_stability_score(period: f64, semi_major_axis: f64) -> f64 {
    (period * semi_major_axis).max(0.0).ln_1p()
}
