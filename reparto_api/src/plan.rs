use std::sync::Arc;

use axum::{Json, extract::State};
use reparto_planner::{day_planner::DayPlan, json::types::JsonOrders};

use crate::state::AppState;

/// Never fails once the body is parsed: failing routes are reported inside
/// the plan.
pub async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOrders>,
) -> Json<DayPlan> {
    let orders = body.into_orders();

    Json(state.planner.plan(&orders).await)
}
