use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    directions_route::{DirectionsRoute, RouteLeg},
    error::ProviderError,
    routing_provider::RoutingProvider,
    routing_request::RoutingRequest,
};

pub const GOOGLE_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Intermediate stops accepted by the Directions API in one request.
pub const GOOGLE_DIRECTIONS_MAX_WAYPOINTS: usize = 25;

const STATUS_OK: &str = "OK";

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,

    #[serde(default)]
    error_message: Option<String>,

    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,

    #[serde(default)]
    waypoint_order: Vec<usize>,

    #[serde(default)]
    overview_polyline: Option<ApiPolyline>,
}

#[derive(Deserialize)]
struct ApiLeg {
    distance: Option<ApiTextValue>,
    duration: Option<ApiTextValue>,
}

#[derive(Deserialize)]
struct ApiTextValue {
    text: String,
    value: f64,
}

#[derive(Deserialize)]
struct ApiPolyline {
    points: String,
}

pub struct GoogleDirectionsClientParams {
    pub api_key: String,

    /// Language of the `text` fields, e.g. "es"
    pub language: String,

    pub api_url: String,
}

impl GoogleDirectionsClientParams {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            language: String::from("es"),
            api_url: String::from(GOOGLE_DIRECTIONS_API_URL),
        }
    }
}

pub struct GoogleDirectionsClient {
    params: GoogleDirectionsClientParams,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    pub fn new(params: GoogleDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Query string of a Directions request, without the key.
    pub fn query_params(&self, request: &RoutingRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", request.origin.to_string()),
            ("destination", request.destination.to_string()),
        ];

        if !request.waypoints.is_empty() {
            let mut waypoints = request
                .waypoints
                .iter()
                .map(|waypoint| waypoint.to_string())
                .collect::<Vec<_>>()
                .join("|");

            if request.optimize_waypoints {
                waypoints.insert_str(0, "optimize:true|");
            }

            params.push(("waypoints", waypoints));
        }

        params.push(("mode", request.travel_mode.to_string()));
        params.push(("language", self.params.language.clone()));

        params
    }

    #[instrument(skip_all, level = "debug", fields(waypoints = request.waypoints.len()))]
    pub async fn fetch_route(
        &self,
        request: &RoutingRequest,
    ) -> Result<DirectionsRoute, ProviderError> {
        if request.waypoints.len() > GOOGLE_DIRECTIONS_MAX_WAYPOINTS {
            return Err(ProviderError::TooManyWaypoints {
                count: request.waypoints.len(),
                max: GOOGLE_DIRECTIONS_MAX_WAYPOINTS,
            });
        }

        let response = self
            .client
            .get(&self.params.api_url)
            .query(&self.query_params(request))
            .query(&[("key", &self.params.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http { status, message });
        }

        let body = response.text().await?;
        debug!("GoogleDirectionsApi: received {} bytes", body.len());

        parse_directions_response(&body)
    }
}

impl RoutingProvider for GoogleDirectionsClient {
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        if self.params.api_key.trim().is_empty() {
            return Err(ProviderError::NotReady(String::from(
                "Google Maps API key is empty",
            )));
        }

        Ok(())
    }

    fn max_waypoints(&self) -> Option<usize> {
        Some(GOOGLE_DIRECTIONS_MAX_WAYPOINTS)
    }

    async fn route(&self, request: &RoutingRequest) -> Result<DirectionsRoute, ProviderError> {
        self.fetch_route(request).await
    }
}

/// Decodes a Directions API JSON body, keeping the first route only.
pub fn parse_directions_response(body: &str) -> Result<DirectionsRoute, ProviderError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;

    if response.status != STATUS_OK {
        return Err(ProviderError::Status {
            status: response.status,
            message: response
                .error_message
                .unwrap_or_else(|| String::from("unknown error")),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(ProviderError::IncompleteResponse("no route in response"))?;

    let legs = route
        .legs
        .into_iter()
        .map(|leg| {
            let (distance_meters, distance_text) = leg
                .distance
                .map(|distance| (distance.value, distance.text))
                .unwrap_or_default();
            let (duration_seconds, duration_text) = leg
                .duration
                .map(|duration| (duration.value, duration.text))
                .unwrap_or_default();

            RouteLeg {
                distance_meters,
                duration_seconds,
                distance_text,
                duration_text,
            }
        })
        .collect();

    Ok(DirectionsRoute {
        legs,
        waypoint_order: route.waypoint_order,
        polyline: route.overview_polyline.map(|polyline| polyline.points),
    })
}

#[cfg(test)]
mod tests {
    use crate::coordinates::Coordinates;

    use super::*;

    fn client() -> GoogleDirectionsClient {
        GoogleDirectionsClient::new(GoogleDirectionsClientParams::new(String::from("key")))
    }

    #[test]
    fn test_query_params_with_optimization() {
        let request = RoutingRequest::optimized(
            Coordinates::new(-33.5, -70.7),
            Coordinates::new(-33.4, -70.6),
            vec![Coordinates::new(-33.45, -70.65), Coordinates::new(-33.42, -70.61)],
        );

        let params = client().query_params(&request);

        assert_eq!(
            params,
            vec![
                ("origin", String::from("-33.5,-70.7")),
                ("destination", String::from("-33.4,-70.6")),
                (
                    "waypoints",
                    String::from("optimize:true|-33.45,-70.65|-33.42,-70.61")
                ),
                ("mode", String::from("driving")),
                ("language", String::from("es")),
            ]
        );
    }

    #[test]
    fn test_query_params_without_waypoints() {
        let mut request = RoutingRequest::optimized(
            Coordinates::new(-33.5, -70.7),
            Coordinates::new(-33.4, -70.6),
            vec![],
        );
        request.optimize_waypoints = false;

        let params = client().query_params(&request);
        assert!(params.iter().all(|(name, _)| *name != "waypoints"));
    }

    #[test]
    fn test_empty_key_is_not_ready() {
        let client =
            GoogleDirectionsClient::new(GoogleDirectionsClientParams::new(String::from("  ")));

        assert!(matches!(
            client.ensure_ready(),
            Err(ProviderError::NotReady(_))
        ));
    }

    #[test]
    fn test_missing_leg_values_count_as_zero() {
        let body = r#"{
            "status": "OK",
            "routes": [{
                "legs": [
                    { "distance": { "text": "1,2 km", "value": 1200 } },
                    { "distance": { "text": "300 m", "value": 300 }, "duration": { "text": "1 min", "value": 60 } }
                ],
                "waypoint_order": [0]
            }]
        }"#;

        let route = parse_directions_response(body).unwrap();

        assert_eq!(route.total_distance_meters(), 1500.0);
        assert_eq!(route.total_duration_seconds(), 60.0);
        assert!(route.polyline.is_none());
    }

    #[test]
    fn test_no_routes_is_incomplete() {
        let body = r#"{ "status": "OK", "routes": [] }"#;

        assert!(matches!(
            parse_directions_response(body),
            Err(ProviderError::IncompleteResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_too_many_waypoints_fails_before_request() {
        let request = RoutingRequest::optimized(
            Coordinates::new(-33.5, -70.7),
            Coordinates::new(-33.4, -70.6),
            vec![Coordinates::new(-33.45, -70.65); GOOGLE_DIRECTIONS_MAX_WAYPOINTS + 1],
        );

        let result = client().fetch_route(&request).await;

        assert!(matches!(
            result,
            Err(ProviderError::TooManyWaypoints { count: 26, max: 25 })
        ));
    }
}
