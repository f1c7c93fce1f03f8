use std::path::Path;

use jiff::SignedDuration;
use reparto_providers::{
    coordinates::Coordinates, google_directions_api::GOOGLE_DIRECTIONS_MAX_WAYPOINTS,
    routing_provider_kind::RoutingProviderKind,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capacity_grouper::DEFAULT_VEHICLE_CAPACITY;

pub const CONFIG_PATH_ENV_VAR: &str = "REPARTO_CONFIG";

pub const WAREHOUSE_ADDRESS: &str = "Inppa, Maipú, Chile";
pub const WAREHOUSE_COORDINATES: Coordinates = Coordinates::new(-33.5334497, -70.7651785);
pub const DESTINATION_ADDRESS: &str = "Teresa Vial 1301, San Miguel, Chile";
pub const DESTINATION_COORDINATES: Coordinates = Coordinates::new(-33.492359, -70.6563238);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A fixed point of every route: where vehicles load, or where they end.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Anchor {
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Start of every route
    pub depot: Anchor,

    /// End of every route
    pub destination: Anchor,

    /// Bottles per vehicle run
    pub vehicle_capacity: u32,

    /// Stops sent to the provider in one request, extra stops are dropped
    pub max_waypoints: usize,

    pub provider: RoutingProviderKind,

    /// Upper bound for one provider call
    pub provider_timeout: SignedDuration,

    /// Provider calls in flight while planning a day
    pub max_concurrent_requests: usize,

    /// Speed used to estimate durations when the provider failed
    pub fallback_speed_kmh: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: Anchor {
                address: String::from(WAREHOUSE_ADDRESS),
                coordinates: WAREHOUSE_COORDINATES,
            },
            destination: Anchor {
                address: String::from(DESTINATION_ADDRESS),
                coordinates: DESTINATION_COORDINATES,
            },
            vehicle_capacity: DEFAULT_VEHICLE_CAPACITY,
            max_waypoints: GOOGLE_DIRECTIONS_MAX_WAYPOINTS,
            provider: RoutingProviderKind::default(),
            provider_timeout: SignedDuration::from_secs(15),
            max_concurrent_requests: 3,
            fallback_speed_kmh: 30.0,
        }
    }
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file named by [`CONFIG_PATH_ENV_VAR`], defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vehicle_capacity == 0 {
            return Err(ConfigError::Invalid(String::from(
                "vehicle_capacity must be positive",
            )));
        }

        if self.max_waypoints == 0 {
            return Err(ConfigError::Invalid(String::from(
                "max_waypoints must be positive",
            )));
        }

        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(String::from(
                "max_concurrent_requests must be positive",
            )));
        }

        if !self.provider_timeout.is_positive() {
            return Err(ConfigError::Invalid(String::from(
                "provider_timeout must be positive",
            )));
        }

        if !(self.fallback_speed_kmh.is_finite() && self.fallback_speed_kmh > 0.0) {
            return Err(ConfigError::Invalid(String::from(
                "fallback_speed_kmh must be positive",
            )));
        }

        for (name, anchor) in [("depot", &self.depot), ("destination", &self.destination)] {
            if !anchor.coordinates.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "{name} coordinates are out of range"
                )));
            }
        }

        Ok(())
    }

    pub fn provider_timeout(&self) -> std::time::Duration {
        self.provider_timeout.unsigned_abs()
    }
}
