use std::sync::Arc;

use axum::{Json, extract::State};
use reparto_planner::{itinerary::Itinerary, json::types::JsonOrders};

use crate::{error::ApiError, state::AppState};

/// Optimizes the body's orders as one vehicle run.
pub async fn optimize_route_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOrders>,
) -> Result<Json<Itinerary>, ApiError> {
    let orders = body.into_orders();
    let itinerary = state.planner.optimizer().optimize(&orders).await?;

    Ok(Json(itinerary))
}
