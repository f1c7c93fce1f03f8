use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use reparto_planner::{
    capacity_grouper::group_orders_by_capacity, json::types::JsonOrders, route_group::RouteGroup,
};
use tracing::info;

use crate::{config::load_config, file_utils::write_json};

#[derive(Args)]
pub struct GroupArgs {
    /// Orders file, `{ "orders": [...] }` or a bare array
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Planner config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bottles per vehicle, overrides the config
    #[arg(long)]
    capacity: Option<u32>,

    /// Write the groups as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: GroupArgs) -> anyhow::Result<()> {
    let capacity = match args.capacity {
        Some(0) => anyhow::bail!("capacity must be positive"),
        Some(capacity) => capacity,
        None => load_config(args.config.as_deref())?.vehicle_capacity,
    };

    let orders = JsonOrders::from_file(&args.input)?;
    let groups = group_orders_by_capacity(&orders, capacity);
    info!(
        "{} orders grouped into {} routes of {} bottles",
        orders.len(),
        groups.len(),
        capacity
    );

    println!("{}", groups_table(&groups, capacity));

    if let Some(out) = args.out {
        write_json(&out, &groups)?;
    }

    Ok(())
}

fn groups_table(groups: &[RouteGroup], capacity: u32) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Route", "Orders", "Bottles", "Over capacity", "Communes"]);

    for group in groups {
        let mut communes: Vec<&str> = Vec::new();
        for order in &group.orders {
            if !communes.contains(&order.zone()) {
                communes.push(order.zone());
            }
        }

        table.add_row(vec![
            group.route_number.to_string(),
            group.len().to_string(),
            group.total_quantity.to_string(),
            group.capacity_excess(capacity).to_string(),
            communes.join(", "),
        ]);
    }

    table
}
