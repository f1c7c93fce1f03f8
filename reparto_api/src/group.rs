use std::sync::Arc;

use axum::{Json, extract::State};
use reparto_planner::{
    capacity_grouper::group_orders_by_capacity, order::DeliveryOrder, route_group::RouteGroup,
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct GroupRequestBody {
    orders: Vec<DeliveryOrder>,

    /// Defaults to the configured vehicle capacity
    capacity: Option<u32>,
}

pub async fn group_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GroupRequestBody>,
) -> Result<Json<Vec<RouteGroup>>, ApiError> {
    let capacity = match body.capacity {
        Some(0) => {
            return Err(ApiError::BadRequest(String::from(
                "capacity must be positive",
            )));
        }
        Some(capacity) => capacity,
        None => state.planner.optimizer().config().vehicle_capacity,
    };

    Ok(Json(group_orders_by_capacity(&body.orders, capacity)))
}
