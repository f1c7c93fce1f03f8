use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    String::from("es")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub enum RoutingProviderKind {
    /// https://developers.google.com/maps/documentation/directions/get-directions
    GoogleDirections {
        #[serde(default = "default_language")]
        language: String,
    },

    /// Straight-line distances, nearest-neighbour visiting order
    AsTheCrowFlies { speed_kmh: f64 },
}

impl Default for RoutingProviderKind {
    fn default() -> Self {
        RoutingProviderKind::GoogleDirections {
            language: default_language(),
        }
    }
}
