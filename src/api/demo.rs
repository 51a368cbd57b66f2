//! `/reset-demo-data` handler.

use super::{ApiError, AppState};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResetSummary {
    pub message: &'static str,
    pub users: usize,
    pub courses: usize,
}

/// `POST /reset-demo-data` - wipes both stores and reloads the demo data.
pub async fn reset_demo_data(State(state): State<AppState>) -> Result<Json<ResetSummary>, ApiError> {
    let counts = state
        .demo
        .reset()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(ResetSummary {
        message: "Demo data reset successfully",
        users: counts.users,
        courses: counts.courses,
    }))
}
