//! Dashboard model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total: u64,
    pub habitable: u64,
    pub non_habitable: u64,
    pub avg_score: f64,
    pub best_model: String,
}

/// Top-candidate table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    #[serde(rename = "Name")]
    pub name: String,
    /// `null` when the dataset cell was blank or malformed
    #[serde(rename = "Radius")]
    pub radius: Option<f64>,
    #[serde(rename = "EqTemp")]
    pub eq_temp: Option<f64>,
    #[serde(rename = "Habitability_Probability")]
    pub habitability_probability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub feature_importance: FeatureImportance,
}

/// `GET /dashboard-data` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub table: Vec<CandidateRow>,
    pub charts: DashboardCharts,
}
