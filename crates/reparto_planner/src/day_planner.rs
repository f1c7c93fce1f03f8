use futures::StreamExt;
use reparto_providers::routing_provider::RoutingProvider;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    capacity_grouper::group_orders_by_capacity,
    fallback::estimate_itinerary,
    itinerary::Itinerary,
    order::DeliveryOrder,
    route_group::RouteGroup,
    route_optimizer::RouteOptimizer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// Visiting order computed by the provider
    Optimized,

    /// Provider failed, input order kept with straight-line totals
    Estimated,

    /// Provider failed and the orders could not be estimated either
    Unrouted,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRoute {
    pub route_number: usize,
    pub status: RouteStatus,
    pub total_quantity: u32,

    /// Bottles above the vehicle capacity
    pub capacity_excess: u32,

    /// Orders of the run, in visiting order when an itinerary exists
    pub orders: Vec<DeliveryOrder>,

    pub itinerary: Option<Itinerary>,
    pub navigation_url: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub routes: Vec<PlannedRoute>,
}

impl DayPlan {
    pub fn total_quantity(&self) -> u32 {
        self.routes
            .iter()
            .fold(0u32, |total, route| total.saturating_add(route.total_quantity))
    }

    pub fn optimized_count(&self) -> usize {
        self.routes
            .iter()
            .filter(|route| route.status == RouteStatus::Optimized)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.routes.len() - self.optimized_count()
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.routes
            .iter()
            .filter_map(|route| route.itinerary.as_ref())
            .map(|itinerary| itinerary.distance_meters)
            .sum()
    }
}

/// Groups a day's orders into vehicle runs and routes every run.
///
/// A failing run never fails the plan: it is reported with its error and, when
/// possible, an estimated itinerary in input order.
pub struct DayPlanner<P> {
    optimizer: RouteOptimizer<P>,
}

impl<P> DayPlanner<P>
where
    P: RoutingProvider,
{
    pub fn new(optimizer: RouteOptimizer<P>) -> Self {
        Self { optimizer }
    }

    pub fn optimizer(&self) -> &RouteOptimizer<P> {
        &self.optimizer
    }

    pub fn group(&self, orders: &[DeliveryOrder]) -> Vec<RouteGroup> {
        group_orders_by_capacity(orders, self.optimizer.config().vehicle_capacity)
    }

    pub async fn plan(&self, orders: &[DeliveryOrder]) -> DayPlan {
        let groups = self.group(orders);
        self.plan_groups(groups).await
    }

    /// Routes already formed groups, at most `max_concurrent_requests` at a
    /// time. Routes come back in group order.
    #[instrument(skip_all, fields(groups = groups.len()))]
    pub async fn plan_groups(&self, groups: Vec<RouteGroup>) -> DayPlan {
        let concurrency = self.optimizer.config().max_concurrent_requests.max(1);

        let pending = groups
            .into_iter()
            .map(|group| self.plan_route(group))
            .collect::<Vec<_>>();

        let routes = futures::stream::iter(pending)
            .buffered(concurrency)
            .collect::<Vec<_>>()
            .await;

        let plan = DayPlan { routes };

        info!(
            "Planned {} routes ({} bottles): {} optimized, {} failed",
            plan.routes.len(),
            plan.total_quantity(),
            plan.optimized_count(),
            plan.failed_count()
        );

        plan
    }

    async fn plan_route(&self, group: RouteGroup) -> PlannedRoute {
        let config = self.optimizer.config();
        let capacity_excess = group.capacity_excess(config.vehicle_capacity);

        if capacity_excess > 0 {
            warn!(
                "Route {} carries {} bottles, {} over capacity",
                group.route_number, group.total_quantity, capacity_excess
            );
        }

        let (status, itinerary, error) = match self.optimizer.optimize(&group.orders).await {
            Ok(itinerary) => {
                info!(
                    "Route {}: {} - {}",
                    group.route_number, itinerary.total_distance, itinerary.total_duration
                );
                (RouteStatus::Optimized, Some(itinerary), None)
            }
            Err(error) => {
                warn!(
                    "Route {}: optimization failed, keeping input order: {}",
                    group.route_number, error
                );

                let estimate = estimate_itinerary(
                    &group.orders,
                    config.depot.coordinates,
                    config.destination.coordinates,
                    config.fallback_speed_kmh,
                );
                let status = if estimate.is_some() {
                    RouteStatus::Estimated
                } else {
                    RouteStatus::Unrouted
                };

                (status, estimate, Some(error.to_string()))
            }
        };

        let orders = match &itinerary {
            Some(itinerary) => visiting_order(&group.orders, itinerary),
            None => group.orders,
        };

        let navigation_url = itinerary
            .as_ref()
            .map(|itinerary| self.optimizer.navigation_url(itinerary, None));

        PlannedRoute {
            route_number: group.route_number,
            status,
            total_quantity: group.total_quantity,
            capacity_excess,
            orders,
            itinerary,
            navigation_url,
            error,
        }
    }
}

/// Orders of the itinerary first, in visiting order, then any order the
/// itinerary left out.
fn visiting_order(orders: &[DeliveryOrder], itinerary: &Itinerary) -> Vec<DeliveryOrder> {
    let mut remaining = orders.iter().collect::<Vec<_>>();
    let mut sorted = Vec::with_capacity(orders.len());

    for order_id in itinerary.order_ids() {
        if let Some(position) = remaining
            .iter()
            .position(|order| order.order_id == order_id)
        {
            sorted.push(remaining.remove(position).clone());
        }
    }

    sorted.extend(remaining.into_iter().cloned());
    sorted
}
