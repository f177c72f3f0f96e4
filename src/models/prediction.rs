//! Prediction model

use serde::{Deserialize, Serialize};

pub const UNKNOWN_PLANET: &str = "Unknown Planet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitabilityLabel {
    #[serde(rename = "Potentially Habitable")]
    PotentiallyHabitable,
    #[serde(rename = "Non-Habitable")]
    NonHabitable,
}

impl HabitabilityLabel {
    pub fn from_flag(habitable: bool) -> Self {
        if habitable {
            HabitabilityLabel::PotentiallyHabitable
        } else {
            HabitabilityLabel::NonHabitable
        }
    }
}

/// How the probability was obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PredictionMethod {
    Classifier,
    #[default]
    Fallback,
}

/// `POST /predict` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub input_planet: String,
    pub prediction: HabitabilityLabel,
    pub confidence_score: f64,
    pub habitable_flag: u8,
    #[serde(skip)]
    pub method: PredictionMethod,
}
