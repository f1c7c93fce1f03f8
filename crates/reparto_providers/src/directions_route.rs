use serde::{Deserialize, Serialize};

/// One leg of a route: origin to first stop, stop to stop, last stop to destination.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteLeg {
    /// Meters
    pub distance_meters: f64,

    /// Seconds
    pub duration_seconds: f64,

    pub distance_text: String,
    pub duration_text: String,
}

/// What a provider answers for a [`RoutingRequest`](crate::routing_request::RoutingRequest).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectionsRoute {
    pub legs: Vec<RouteLeg>,

    /// Visiting sequence as indices into the request's waypoints
    pub waypoint_order: Vec<usize>,

    /// Provider-specific encoded path
    pub polyline: Option<String>,
}

impl DirectionsRoute {
    pub fn total_distance_meters(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_meters).sum()
    }

    pub fn total_duration_seconds(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration_seconds).sum()
    }
}
