use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use reparto_planner::{
    day_planner::{DayPlan, DayPlanner},
    json::types::JsonOrders,
    route_optimizer::RouteOptimizer,
};
use reparto_providers::routing_client::RoutingClient;
use tracing::{info, warn};

use crate::{config::load_config, file_utils::write_json, parsers};

#[derive(Args)]
pub struct PlanArgs {
    /// Orders file, `{ "orders": [...] }` or a bare array
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Planner config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upper bound for one provider call, overrides the config
    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,

    /// Write the plan as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(timeout) = args.timeout {
        config.provider_timeout = timeout;
        config.validate()?;
    }

    let orders = JsonOrders::from_file(&args.input)?;
    info!("Planning {} orders from {:?}", orders.len(), args.input);

    let client = RoutingClient::from_env(&config.provider);
    info!("Routing provider: {}", client.name());

    let planner = DayPlanner::new(RouteOptimizer::new(config, client));
    if let Err(error) = planner.optimizer().ensure_ready() {
        warn!("{}, routes will be estimated", error);
    }

    let plan = planner.plan(&orders).await;

    println!("{}", summary_table(&plan));
    for route in &plan.routes {
        if let Some(url) = &route.navigation_url {
            println!("Route {}: {}", route.route_number, url);
        }
    }

    if let Some(out) = args.out {
        write_json(&out, &plan)?;
        info!("Plan written to {:?}", out);
    }

    Ok(())
}

fn summary_table(plan: &DayPlan) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Route", "Status", "Stops", "Bottles", "Distance", "Duration", "Error",
    ]);

    for route in &plan.routes {
        let (distance, duration) = match &route.itinerary {
            Some(itinerary) => (
                itinerary.total_distance.clone(),
                itinerary.total_duration.clone(),
            ),
            None => (String::from("-"), String::from("-")),
        };

        let bottles = if route.capacity_excess > 0 {
            format!("{} (+{})", route.total_quantity, route.capacity_excess)
        } else {
            route.total_quantity.to_string()
        };

        table.add_row(vec![
            route.route_number.to_string(),
            format!("{:?}", route.status),
            route.orders.len().to_string(),
            bottles,
            distance,
            duration,
            route.error.clone().unwrap_or_default(),
        ]);
    }

    table
}
