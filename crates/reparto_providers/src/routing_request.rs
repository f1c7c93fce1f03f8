use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
            }
        )
    }
}

/// A multi-stop route between two fixed anchors.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,

    /// Intermediate stops, in input order
    pub waypoints: Vec<Coordinates>,

    /// Let the provider choose the visiting order of `waypoints`
    pub optimize_waypoints: bool,

    pub travel_mode: TravelMode,
}

impl RoutingRequest {
    pub fn optimized(
        origin: Coordinates,
        destination: Coordinates,
        waypoints: Vec<Coordinates>,
    ) -> Self {
        Self {
            origin,
            destination,
            waypoints,
            optimize_waypoints: true,
            travel_mode: TravelMode::Driving,
        }
    }
}
