use reparto_providers::{
    coordinates::Coordinates,
    haversine::{path_distance_meters, travel_seconds},
};

use crate::{
    itinerary::{Itinerary, RouteStep},
    order::DeliveryOrder,
    route_optimizer::collect_stops,
};

/// Degraded itinerary for when the provider is unusable: the orders keep their
/// input order and the totals are measured along straight lines from `origin`
/// through every stop to `destination`, driven at `speed_kmh`.
///
/// `None` when there is nothing to route or an order has no coordinates.
pub fn estimate_itinerary(
    orders: &[DeliveryOrder],
    origin: Coordinates,
    destination: Coordinates,
    speed_kmh: f64,
) -> Option<Itinerary> {
    if orders.is_empty() {
        return None;
    }

    let stops = collect_stops(orders).ok()?;

    let path = std::iter::once(origin)
        .chain(stops.iter().map(|stop| stop.coordinates))
        .chain(std::iter::once(destination))
        .collect::<Vec<_>>();

    let distance_meters = path_distance_meters(&path);
    let duration_seconds = travel_seconds(distance_meters, speed_kmh);

    let steps = stops
        .iter()
        .enumerate()
        .map(|(position, stop)| RouteStep::new(stop.order, stop.coordinates, position + 1))
        .collect();

    let mut itinerary = Itinerary::new(
        steps,
        distance_meters,
        duration_seconds,
        (0..stops.len()).collect(),
    );
    itinerary.estimated = true;

    Some(itinerary)
}
