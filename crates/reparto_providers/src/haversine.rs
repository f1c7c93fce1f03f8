use geo_types::Point;

use crate::coordinates::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers.
pub fn haversine_km<P>(from: P, to: P) -> f64
where
    P: Into<Point>,
{
    let from: Point = from.into();
    let to: Point = to.into();

    let lat1_rad = from.y().to_radians();
    let lat2_rad = to.y().to_radians();
    let d_lat = lat2_rad - lat1_rad;
    let d_lng = (to.x() - from.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn haversine_meters<P>(from: P, to: P) -> f64
where
    P: Into<Point>,
{
    haversine_km(from, to) * 1000.0
}

/// Sum of the great-circle legs along `points`, in meters.
pub fn path_distance_meters(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_meters(&pair[0], &pair[1]))
        .sum()
}

/// Seconds needed to cover `meters` at a constant `speed_kmh`.
pub fn travel_seconds(meters: f64, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }

    meters * 3.6 / speed_kmh
}
