use reparto_providers::{
    coordinates::Coordinates,
    directions_route::{DirectionsRoute, RouteLeg},
    error::ProviderError,
    routing_provider::RoutingProvider,
    routing_request::RoutingRequest,
};

use crate::order::DeliveryOrder;

pub fn create_order(id: &str, quantity: u32, commune: Option<&str>) -> DeliveryOrder {
    // Spread the orders a little so every stop has distinct coordinates
    let offset = id.bytes().map(|b| b as f64).sum::<f64>() / 10_000.0;

    DeliveryOrder {
        order_id: id.to_owned(),
        customer_name: format!("Customer {id}"),
        quantity,
        commune: commune.map(str::to_owned),
        latitude: Some(-33.45 + offset),
        longitude: Some(-70.65 - offset),
        raw_address: format!("Street {id}"),
        product_name: None,
    }
}

pub fn create_order_at(id: &str, coordinates: Coordinates) -> DeliveryOrder {
    DeliveryOrder {
        latitude: Some(coordinates.lat),
        longitude: Some(coordinates.lng),
        ..create_order(id, 1, None)
    }
}

/// Answers with a fixed route, or a fixed status error.
pub struct TestProvider {
    pub waypoint_order: Option<Vec<usize>>,
    pub leg: RouteLeg,
    pub status: Option<String>,
}

impl TestProvider {
    /// Visits the waypoints in reverse input order, 1 km and 2 minutes per leg.
    pub fn reversing() -> Self {
        Self {
            waypoint_order: None,
            leg: RouteLeg {
                distance_meters: 1000.0,
                duration_seconds: 120.0,
                distance_text: String::from("1,0 km"),
                duration_text: String::from("2 min"),
            },
            status: None,
        }
    }

    pub fn failing(status: &str) -> Self {
        Self {
            status: Some(status.to_owned()),
            ..Self::reversing()
        }
    }
}

impl RoutingProvider for TestProvider {
    async fn route(&self, request: &RoutingRequest) -> Result<DirectionsRoute, ProviderError> {
        if let Some(status) = &self.status {
            return Err(ProviderError::Status {
                status: status.clone(),
                message: String::from("test"),
            });
        }

        let waypoint_order = self
            .waypoint_order
            .clone()
            .unwrap_or_else(|| (0..request.waypoints.len()).rev().collect());

        Ok(DirectionsRoute {
            legs: vec![self.leg.clone(); request.waypoints.len() + 1],
            waypoint_order,
            polyline: Some(String::from("polyline")),
        })
    }
}
