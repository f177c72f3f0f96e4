//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::features::LayoutInfo;
use crate::AppState;

pub const LIVENESS_MESSAGE: &str = "ExoHabit Backend API is Live and Running!";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    timestamp: i64,
    loaded_at: i64,
    model_loaded: bool,
    model_name: Option<String>,
    scaler_loaded: bool,
    dataset_rows: usize,
    feature_layout: LayoutInfo,
}

/// Plain-text liveness
pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let context = &state.context;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now().timestamp(),
        loaded_at: context.loaded_at.timestamp(),
        model_loaded: context.predictor.has_classifier(),
        model_name: context.predictor.classifier_name().map(str::to_string),
        scaler_loaded: context.predictor.has_scaler(),
        dataset_rows: context.dataset.as_ref().map_or(0, |d| d.len()),
        feature_layout: LayoutInfo::current(),
    })
}
