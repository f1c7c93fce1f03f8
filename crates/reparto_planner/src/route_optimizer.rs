use std::time::Duration;

use reparto_providers::{
    coordinates::Coordinates, error::ProviderError, routing_provider::RoutingProvider,
    routing_request::RoutingRequest,
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    itinerary::{Itinerary, RouteStep},
    navigation::navigation_url,
    order::DeliveryOrder,
    planner_config::PlannerConfig,
};

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("No orders to optimize")]
    NoOrders,

    #[error("{count} order(s) have no valid coordinates")]
    MissingCoordinates { count: usize },

    #[error("Routing provider not ready: {0}")]
    ProviderNotReady(String),

    #[error("Routing provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Invalid waypoint order {order:?} for {stops} stops")]
    InvalidWaypointOrder { order: Vec<usize>, stops: usize },

    #[error(transparent)]
    Provider(ProviderError),
}

impl From<ProviderError> for OptimizeError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::NotReady(reason) => OptimizeError::ProviderNotReady(reason),
            other => OptimizeError::Provider(other),
        }
    }
}

impl OptimizeError {
    /// The input was rejected before any provider call.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            OptimizeError::NoOrders | OptimizeError::MissingCoordinates { .. }
        )
    }

    pub fn provider_status(&self) -> Option<&str> {
        match self {
            OptimizeError::Provider(error) => error.status(),
            _ => None,
        }
    }
}

/// An order that passed validation, with its coordinates.
pub(crate) struct Stop<'a> {
    pub order: &'a DeliveryOrder,
    pub coordinates: Coordinates,
}

/// Fails with the number of orders lacking coordinates, so that no delivery
/// is silently left out of a route.
pub(crate) fn collect_stops(orders: &[DeliveryOrder]) -> Result<Vec<Stop<'_>>, OptimizeError> {
    let invalid = orders
        .iter()
        .filter(|order| !order.has_coordinates())
        .count();

    if invalid > 0 {
        return Err(OptimizeError::MissingCoordinates { count: invalid });
    }

    Ok(orders
        .iter()
        .filter_map(|order| {
            order
                .coordinates()
                .map(|coordinates| Stop { order, coordinates })
        })
        .collect())
}

/// Providers may omit the order when nothing was reordered; that is read as
/// the identity.
fn checked_waypoint_order(order: Vec<usize>, stops: usize) -> Result<Vec<usize>, OptimizeError> {
    if order.is_empty() {
        return Ok((0..stops).collect());
    }

    let mut seen = vec![false; stops];
    let is_permutation = order.len() == stops
        && order.iter().all(|&index| {
            index < stops && !std::mem::replace(&mut seen[index], true)
        });

    if !is_permutation {
        return Err(OptimizeError::InvalidWaypointOrder { order, stops });
    }

    Ok(order)
}

/// Orders the stops of one vehicle run through a [`RoutingProvider`].
pub struct RouteOptimizer<P> {
    config: PlannerConfig,
    provider: P,
}

impl<P> RouteOptimizer<P>
where
    P: RoutingProvider,
{
    pub fn new(config: PlannerConfig, provider: P) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn ensure_ready(&self) -> Result<(), OptimizeError> {
        self.provider.ensure_ready().map_err(OptimizeError::from)
    }

    /// Stops accepted in one request: the configured limit, lowered to the
    /// provider's own limit.
    pub fn max_waypoints(&self) -> usize {
        match self.provider.max_waypoints() {
            Some(limit) => self.config.max_waypoints.min(limit),
            None => self.config.max_waypoints,
        }
    }

    /// Route from the configured depot to the configured destination.
    pub async fn optimize(&self, orders: &[DeliveryOrder]) -> Result<Itinerary, OptimizeError> {
        self.optimize_between(
            orders,
            self.config.depot.coordinates,
            self.config.destination.coordinates,
        )
        .await
    }

    #[instrument(skip_all, level = "debug", fields(orders = orders.len()))]
    pub async fn optimize_between(
        &self,
        orders: &[DeliveryOrder],
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Itinerary, OptimizeError> {
        if orders.is_empty() {
            return Err(OptimizeError::NoOrders);
        }

        let mut stops = collect_stops(orders)?;

        let max_waypoints = self.max_waypoints();
        let skipped = if stops.len() > max_waypoints {
            let skipped = stops.split_off(max_waypoints);
            warn!(
                "Route has {} stops but the provider accepts {}, dropping the last {}",
                orders.len(),
                max_waypoints,
                skipped.len()
            );
            skipped
        } else {
            Vec::new()
        };

        self.ensure_ready()?;

        let request = RoutingRequest::optimized(
            origin,
            destination,
            stops.iter().map(|stop| stop.coordinates).collect(),
        );

        let timeout = self.config.provider_timeout();
        let route = tokio::time::timeout(timeout, self.provider.route(&request))
            .await
            .map_err(|_| OptimizeError::Timeout(timeout))??;

        let waypoint_order = checked_waypoint_order(route.waypoint_order.clone(), stops.len())?;

        let steps = waypoint_order
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let stop = &stops[index];
                RouteStep::new(stop.order, stop.coordinates, position + 1)
            })
            .collect();

        let mut itinerary = Itinerary::new(
            steps,
            route.total_distance_meters(),
            route.total_duration_seconds(),
            waypoint_order,
        );
        itinerary.polyline = route.polyline;
        itinerary.skipped_order_ids = skipped
            .iter()
            .map(|stop| stop.order.order_id.clone())
            .collect();

        debug!(
            "Optimized {} stops: {} - {}",
            itinerary.len(),
            itinerary.total_distance,
            itinerary.total_duration
        );

        Ok(itinerary)
    }

    /// Navigation link starting at the configured depot.
    pub fn navigation_url(
        &self,
        itinerary: &Itinerary,
        destination_override: Option<Coordinates>,
    ) -> String {
        navigation_url(itinerary, &self.config, destination_override)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{TestProvider, create_order};

    use super::*;

    #[test]
    fn test_checked_waypoint_order() {
        assert_eq!(checked_waypoint_order(vec![2, 0, 1], 3).unwrap(), vec![2, 0, 1]);
        assert_eq!(checked_waypoint_order(vec![], 2).unwrap(), vec![0, 1]);
        assert!(checked_waypoint_order(vec![0, 0, 1], 3).is_err());
        assert!(checked_waypoint_order(vec![0, 1], 3).is_err());
        assert!(checked_waypoint_order(vec![0, 3, 1], 3).is_err());
    }

    #[test]
    fn test_collect_stops_counts_invalid_orders() {
        let mut orders = vec![
            create_order("1", 1, None),
            create_order("2", 1, None),
            create_order("3", 1, None),
        ];
        orders[0].latitude = None;
        orders[2].longitude = Some(f64::NAN);

        assert!(matches!(
            collect_stops(&orders),
            Err(OptimizeError::MissingCoordinates { count: 2 })
        ));
    }

    #[test]
    fn test_not_ready_maps_to_its_own_variant() {
        let error = OptimizeError::from(ProviderError::NotReady(String::from("no key")));
        assert!(matches!(error, OptimizeError::ProviderNotReady(_)));

        let error = OptimizeError::from(ProviderError::Status {
            status: String::from("OVER_QUERY_LIMIT"),
            message: String::from("quota"),
        });
        assert_eq!(error.provider_status(), Some("OVER_QUERY_LIMIT"));
        assert!(!error.is_invalid_input());
    }

    #[tokio::test]
    async fn test_reorders_steps_by_waypoint_order() {
        let optimizer = RouteOptimizer::new(PlannerConfig::default(), TestProvider::reversing());
        let orders = vec![
            create_order("a", 10, None),
            create_order("b", 20, None),
            create_order("c", 5, None),
        ];

        let itinerary = optimizer.optimize(&orders).await.unwrap();

        assert_eq!(itinerary.order_ids().collect::<Vec<_>>(), vec!["c", "b", "a"]);
        assert_eq!(
            itinerary
                .steps
                .iter()
                .map(|step| step.order_index)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(itinerary.waypoint_order, vec![2, 1, 0]);
        assert_eq!(itinerary.distance_meters, 4000.0);
        assert_eq!(itinerary.duration_seconds, 480.0);
        assert_eq!(itinerary.total_distance, "4.0 km");
        assert_eq!(itinerary.total_duration, "8 min");
        assert_eq!(itinerary.polyline.as_deref(), Some("polyline"));
    }
}
