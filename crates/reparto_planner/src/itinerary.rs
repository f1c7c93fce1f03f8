use reparto_providers::coordinates::Coordinates;
use serde::{Deserialize, Serialize};

use crate::{
    format::{format_distance, format_duration},
    order::DeliveryOrder,
};

/// One delivery of an itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub order_id: String,
    pub customer_name: String,
    pub address: String,
    pub commune: Option<String>,
    pub quantity: u32,
    pub latitude: f64,
    pub longitude: f64,

    /// 1-based position in the visiting sequence
    pub order_index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl RouteStep {
    pub fn new(order: &DeliveryOrder, coordinates: Coordinates, order_index: usize) -> Self {
        Self {
            order_id: order.order_id.clone(),
            customer_name: order.customer_name.clone(),
            address: order.raw_address.clone(),
            commune: order.commune.clone(),
            quantity: order.quantity,
            latitude: coordinates.lat,
            longitude: coordinates.lng,
            order_index,
            product_name: order.product_name.clone(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Visiting sequence of one vehicle, with its totals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub steps: Vec<RouteStep>,
    pub total_distance: String,
    pub total_duration: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,

    /// Indices into the routed orders, in visiting order
    pub waypoint_order: Vec<usize>,

    /// Orders left out because the provider limits the number of stops
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_order_ids: Vec<String>,

    /// Computed locally from straight-line distances instead of by the provider
    #[serde(default)]
    pub estimated: bool,
}

impl Itinerary {
    pub fn new(
        steps: Vec<RouteStep>,
        distance_meters: f64,
        duration_seconds: f64,
        waypoint_order: Vec<usize>,
    ) -> Self {
        Self {
            steps,
            total_distance: format_distance(distance_meters),
            total_duration: format_duration(duration_seconds),
            distance_meters,
            duration_seconds,
            polyline: None,
            waypoint_order,
            skipped_order_ids: Vec::new(),
            estimated: false,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.steps
            .iter()
            .fold(0u32, |total, step| total.saturating_add(step.quantity))
    }

    pub fn order_ids(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.order_id.as_str())
    }
}
