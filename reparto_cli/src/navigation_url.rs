use std::path::PathBuf;

use clap::Args;
use reparto_planner::{day_planner::DayPlan, navigation::navigation_url};
use reparto_providers::coordinates::Coordinates;

use crate::{config::load_config, file_utils::read_json, parsers};

#[derive(Args)]
pub struct NavigationUrlArgs {
    /// Plan written by `reparto plan --out`
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Planner config file, for the depot and the default destination
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// End the routes here instead of the configured destination, LAT,LNG
    #[arg(long, value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    destination: Option<Coordinates>,

    /// Only print this route
    #[arg(short, long)]
    route: Option<usize>,
}

pub fn run(args: NavigationUrlArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let plan: DayPlan = read_json(&args.input)?;

    let routes = plan
        .routes
        .iter()
        .filter(|route| args.route.is_none_or(|number| route.route_number == number));

    for route in routes {
        match &route.itinerary {
            Some(itinerary) => println!(
                "Route {}: {}",
                route.route_number,
                navigation_url(itinerary, &config, args.destination)
            ),
            None => println!("Route {}: no itinerary", route.route_number),
        }
    }

    Ok(())
}
