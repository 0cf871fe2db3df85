//! Dashboard settings endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use orderdesk_core::DashboardConfig;
use std::sync::Arc;

/// The `dashboard` configuration section, loaded by the UI on start
pub async fn dashboard_settings(State(state): State<Arc<AppState>>) -> Json<DashboardConfig> {
    Json(state.config.dashboard.clone())
}
