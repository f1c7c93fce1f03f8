use jiff::SpanRelativeTo;
use reparto_providers::coordinates::Coordinates;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// "lat,lng" in degrees, e.g. "-33.45,-70.66".
pub fn parse_coordinates(input: &str) -> Result<Coordinates, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected LAT,LNG"))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("Invalid latitude: {error}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("Invalid longitude: {error}"))?;

    let coordinates = Coordinates::new(lat, lng);
    if !coordinates.is_valid() {
        return Err(String::from("Coordinates out of range"));
    }

    Ok(coordinates)
}
