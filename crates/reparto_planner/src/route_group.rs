use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::order::DeliveryOrder;

/// Orders loaded on one vehicle run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroup {
    /// 1-based, in creation order
    pub route_number: usize,
    pub total_quantity: u32,
    pub orders: Vec<DeliveryOrder>,
}

impl RouteGroup {
    pub fn new(route_number: usize) -> Self {
        Self {
            route_number,
            total_quantity: 0,
            orders: Vec::new(),
        }
    }

    pub fn push(&mut self, order: DeliveryOrder) {
        self.total_quantity = self.total_quantity.saturating_add(order.quantity);
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Bottles above `capacity`, zero when the group fits.
    pub fn capacity_excess(&self, capacity: u32) -> u32 {
        self.total_quantity.saturating_sub(capacity)
    }
}
