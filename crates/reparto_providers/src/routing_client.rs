use tracing::warn;

use crate::{
    as_the_crow_flies::CrowFliesProvider,
    directions_route::DirectionsRoute,
    error::ProviderError,
    google_directions_api::{GoogleDirectionsClient, GoogleDirectionsClientParams},
    routing_provider::RoutingProvider,
    routing_provider_kind::RoutingProviderKind,
    routing_request::RoutingRequest,
};

pub const GOOGLE_MAPS_API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Routing provider selected at startup.
pub enum RoutingClient {
    GoogleDirections(GoogleDirectionsClient),
    AsTheCrowFlies(CrowFliesProvider),

    /// The selected provider could not be initialized. Every request fails
    /// with [`ProviderError::NotReady`].
    Unavailable { reason: String },
}

impl RoutingClient {
    pub fn new(kind: &RoutingProviderKind, api_key: Option<String>) -> Self {
        match kind {
            RoutingProviderKind::GoogleDirections { language } => match api_key {
                Some(api_key) if !api_key.trim().is_empty() => {
                    let mut params = GoogleDirectionsClientParams::new(api_key);
                    params.language = language.clone();
                    RoutingClient::GoogleDirections(GoogleDirectionsClient::new(params))
                }
                _ => {
                    warn!(
                        "{} is not set, route optimization is unavailable",
                        GOOGLE_MAPS_API_KEY_ENV_VAR
                    );
                    RoutingClient::Unavailable {
                        reason: format!("{GOOGLE_MAPS_API_KEY_ENV_VAR} is not configured"),
                    }
                }
            },
            RoutingProviderKind::AsTheCrowFlies { speed_kmh } => {
                RoutingClient::AsTheCrowFlies(CrowFliesProvider::new(*speed_kmh))
            }
        }
    }

    /// Reads the API key from [`GOOGLE_MAPS_API_KEY_ENV_VAR`].
    pub fn from_env(kind: &RoutingProviderKind) -> Self {
        Self::new(kind, std::env::var(GOOGLE_MAPS_API_KEY_ENV_VAR).ok())
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoutingClient::GoogleDirections(_) => "google_directions",
            RoutingClient::AsTheCrowFlies(_) => "as_the_crow_flies",
            RoutingClient::Unavailable { .. } => "unavailable",
        }
    }
}

impl RoutingProvider for RoutingClient {
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        match self {
            RoutingClient::GoogleDirections(client) => client.ensure_ready(),
            RoutingClient::AsTheCrowFlies(provider) => provider.ensure_ready(),
            RoutingClient::Unavailable { reason } => Err(ProviderError::NotReady(reason.clone())),
        }
    }

    fn max_waypoints(&self) -> Option<usize> {
        match self {
            RoutingClient::GoogleDirections(client) => client.max_waypoints(),
            RoutingClient::AsTheCrowFlies(provider) => provider.max_waypoints(),
            RoutingClient::Unavailable { .. } => None,
        }
    }

    async fn route(&self, request: &RoutingRequest) -> Result<DirectionsRoute, ProviderError> {
        match self {
            RoutingClient::GoogleDirections(client) => client.route(request).await,
            RoutingClient::AsTheCrowFlies(provider) => provider.route(request).await,
            RoutingClient::Unavailable { reason } => Err(ProviderError::NotReady(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_unavailable() {
        let client = RoutingClient::new(&RoutingProviderKind::default(), None);

        assert_eq!(client.name(), "unavailable");
        assert!(matches!(
            client.ensure_ready(),
            Err(ProviderError::NotReady(reason)) if reason.contains(GOOGLE_MAPS_API_KEY_ENV_VAR)
        ));
    }

    #[test]
    fn test_blank_key_is_unavailable() {
        let client = RoutingClient::new(&RoutingProviderKind::default(), Some(String::from(" ")));
        assert_eq!(client.name(), "unavailable");
    }

    #[test]
    fn test_google_client_with_key() {
        let client =
            RoutingClient::new(&RoutingProviderKind::default(), Some(String::from("secret")));

        assert_eq!(client.name(), "google_directions");
        assert!(client.ensure_ready().is_ok());
        assert_eq!(client.max_waypoints(), Some(25));
    }

    #[test]
    fn test_crow_flies_needs_no_key() {
        let client = RoutingClient::new(
            &RoutingProviderKind::AsTheCrowFlies { speed_kmh: 30.0 },
            None,
        );

        assert_eq!(client.name(), "as_the_crow_flies");
        assert!(client.ensure_ready().is_ok());
    }

    #[test]
    fn test_provider_kind_json() {
        let kind: RoutingProviderKind =
            serde_json::from_str(r#"{ "AsTheCrowFlies": { "speed_kmh": 25.0 } }"#).unwrap();
        assert_eq!(kind, RoutingProviderKind::AsTheCrowFlies { speed_kmh: 25.0 });

        let kind: RoutingProviderKind =
            serde_json::from_str(r#"{ "GoogleDirections": {} }"#).unwrap();
        assert_eq!(kind, RoutingProviderKind::default());
    }
}
