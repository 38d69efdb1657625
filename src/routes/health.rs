use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

pub const HEALTH_MESSAGE: &str = "modemode.ai API server is running";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub message: &'static str,
    pub has_gemini_key: bool,
}

#[instrument(skip(state))]
pub async fn health_route(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: HEALTH_MESSAGE,
        has_gemini_key: state.config.has_gemini_key(),
    })
}
