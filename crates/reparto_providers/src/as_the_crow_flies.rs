use crate::{
    coordinates::Coordinates,
    directions_route::{DirectionsRoute, RouteLeg},
    error::ProviderError,
    haversine::{haversine_meters, travel_seconds},
    routing_provider::RoutingProvider,
    routing_request::RoutingRequest,
};

/// Local provider: straight-line legs at a constant speed, waypoints visited
/// in nearest-neighbour order from the origin.
#[derive(Debug, Clone, Copy)]
pub struct CrowFliesProvider {
    speed_kmh: f64,
}

impl CrowFliesProvider {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn compute_route(&self, request: &RoutingRequest) -> DirectionsRoute {
        let waypoint_order = if request.optimize_waypoints {
            nearest_neighbour_order(&request.origin, &request.waypoints)
        } else {
            (0..request.waypoints.len()).collect()
        };

        let path = std::iter::once(&request.origin)
            .chain(waypoint_order.iter().map(|&index| &request.waypoints[index]))
            .chain(std::iter::once(&request.destination))
            .collect::<Vec<_>>();

        let legs = path
            .windows(2)
            .map(|pair| {
                let distance_meters = haversine_meters(pair[0], pair[1]);
                let duration_seconds = travel_seconds(distance_meters, self.speed_kmh);

                RouteLeg {
                    distance_meters,
                    duration_seconds,
                    distance_text: format!("{:.1} km", distance_meters / 1000.0),
                    duration_text: format!("{} min", (duration_seconds / 60.0).round()),
                }
            })
            .collect();

        DirectionsRoute {
            legs,
            waypoint_order,
            polyline: None,
        }
    }
}

impl RoutingProvider for CrowFliesProvider {
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        if !(self.speed_kmh.is_finite() && self.speed_kmh > 0.0) {
            return Err(ProviderError::NotReady(format!(
                "invalid speed {} km/h",
                self.speed_kmh
            )));
        }

        Ok(())
    }

    async fn route(&self, request: &RoutingRequest) -> Result<DirectionsRoute, ProviderError> {
        Ok(self.compute_route(request))
    }
}

/// Greedy tour: from `start`, always go to the closest unvisited point.
/// Ties keep the lowest index.
pub fn nearest_neighbour_order(start: &Coordinates, points: &[Coordinates]) -> Vec<usize> {
    let mut visited = vec![false; points.len()];
    let mut order = Vec::with_capacity(points.len());
    let mut current = *start;

    for _ in 0..points.len() {
        let mut best: Option<(usize, f64)> = None;

        for (index, point) in points.iter().enumerate() {
            if visited[index] {
                continue;
            }

            let distance = haversine_meters(&current, point);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }

        if let Some((index, _)) = best {
            visited[index] = true;
            order.push(index);
            current = points[index];
        }
    }

    order
}
