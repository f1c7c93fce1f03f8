use clap::Args;
use reparto_providers::{coordinates::Coordinates, haversine::haversine_km};

use crate::parsers;

#[derive(Args)]
pub struct DistanceArgs {
    /// Start point, LAT,LNG
    #[arg(long, value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    from: Coordinates,

    /// End point, LAT,LNG
    #[arg(long, value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    to: Coordinates,
}

pub fn run(args: DistanceArgs) {
    println!("{:.3} km", haversine_km(&args.from, &args.to));
}
