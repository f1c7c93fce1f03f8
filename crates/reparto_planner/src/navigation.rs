use reparto_providers::{coordinates::Coordinates, routing_request::TravelMode};

use crate::{itinerary::Itinerary, planner_config::PlannerConfig};

pub const GOOGLE_MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Turn-by-turn link for the Google Maps app: the configured depot as origin,
/// the stops as waypoints in visiting order, and the configured destination
/// unless `destination_override` is given.
pub fn navigation_url(
    itinerary: &Itinerary,
    config: &PlannerConfig,
    destination_override: Option<Coordinates>,
) -> String {
    let origin = config.depot.coordinates;
    let destination = destination_override.unwrap_or(config.destination.coordinates);

    let waypoints = itinerary
        .steps
        .iter()
        .map(|step| step.coordinates().to_string())
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "{GOOGLE_MAPS_DIRECTIONS_URL}?api=1&origin={origin}&destination={destination}&waypoints={waypoints}&travelmode={}",
        TravelMode::Driving
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        itinerary::RouteStep,
        test_utils::create_order_at,
    };

    use super::*;

    fn itinerary() -> Itinerary {
        let first = create_order_at("1", Coordinates::new(-33.42, -70.61));
        let second = create_order_at("2", Coordinates::new(-33.45, -70.66));

        Itinerary::new(
            vec![
                RouteStep::new(&second, second.coordinates().unwrap(), 1),
                RouteStep::new(&first, first.coordinates().unwrap(), 2),
            ],
            0.0,
            0.0,
            vec![1, 0],
        )
    }

    #[test]
    fn test_navigation_url() {
        let url = navigation_url(&itinerary(), &PlannerConfig::default(), None);

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1\
             &origin=-33.5334497,-70.7651785\
             &destination=-33.492359,-70.6563238\
             &waypoints=-33.45,-70.66|-33.42,-70.61\
             &travelmode=driving"
        );
    }

    #[test]
    fn test_navigation_url_with_destination_override() {
        let url = navigation_url(
            &itinerary(),
            &PlannerConfig::default(),
            Some(Coordinates::new(-33.5334497, -70.7651785)),
        );

        assert!(url.contains("&destination=-33.5334497,-70.7651785&"));
        assert!(url.contains("&origin=-33.5334497,-70.7651785&"));
    }
}
