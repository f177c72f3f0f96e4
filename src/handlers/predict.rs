//! Prediction handler

use axum::{body::Bytes, extract::State, Json};

use crate::models::PredictionResult;
use crate::{AppResult, AppState};

/// Score one planet. The body is parsed here rather than by the `Json`
/// extractor so that an empty body or a missing content type still works.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictionResult>> {
    tracing::debug!("Input: {}", String::from_utf8_lossy(&body));

    let result = state.context.predictor.predict_body(&body)?;

    Ok(Json(result))
}
