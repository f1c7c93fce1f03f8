use reparto_providers::coordinates::Coordinates;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zone used for orders that have no commune.
pub const UNASSIGNED_COMMUNE: &str = "Sin Comuna";

/// A pending order, as supplied by the order data source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "Order")]
pub struct DeliveryOrder {
    pub order_id: String,

    #[serde(default)]
    pub customer_name: String,

    /// Bottles
    #[serde(default)]
    pub quantity: u32,

    /// Delivery zone, a municipality of the city
    #[serde(default)]
    pub commune: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub raw_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl DeliveryOrder {
    /// Geocoded position, only when both values are present and in range.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let coordinates = Coordinates::new(self.latitude?, self.longitude?);
        coordinates.is_valid().then_some(coordinates)
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Commune name, or [`UNASSIGNED_COMMUNE`] when missing or blank.
    pub fn zone(&self) -> &str {
        match self.commune.as_deref() {
            Some(commune) if !commune.trim().is_empty() => commune,
            _ => UNASSIGNED_COMMUNE,
        }
    }
}

/// Saturates at `u32::MAX`.
pub fn total_quantity(orders: &[DeliveryOrder]) -> u32 {
    orders
        .iter()
        .fold(0u32, |total, order| total.saturating_add(order.quantity))
}
