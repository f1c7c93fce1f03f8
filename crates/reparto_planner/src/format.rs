/// "850 m" below one kilometer, "12.3 km" from there on.
pub fn format_distance(meters: f64) -> String {
    let rounded = meters.round();
    if rounded < 1000.0 {
        return format!("{rounded} m");
    }

    format!("{:.1} km", meters / 1000.0)
}

/// "45 min" below one hour, "2h 5min" from there on.
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;

    if hours > 0 {
        return format!("{hours}h {minutes}min");
    }

    format!("{minutes} min")
}
