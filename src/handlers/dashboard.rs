//! Dashboard handler

use axum::{extract::State, Json};

use crate::logic::dashboard;
use crate::models::DashboardSnapshot;
use crate::AppState;

/// Summary statistics and top candidates, never fails
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(dashboard::snapshot(state.context.dataset.as_ref()))
}
