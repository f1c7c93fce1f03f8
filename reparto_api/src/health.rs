use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    provider: &'static str,
    provider_ready: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    provider_error: Option<String>,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let optimizer = state.planner.optimizer();
    let provider_error = optimizer.ensure_ready().err().map(|error| error.to_string());

    Json(HealthResponse {
        provider: optimizer.provider().name(),
        provider_ready: provider_error.is_none(),
        provider_error,
    })
}
