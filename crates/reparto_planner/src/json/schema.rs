use schemars::schema_for;

use crate::{json::types, planner_config::PlannerConfig};

pub fn generate_orders_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonOrders))
}

pub fn generate_config_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(PlannerConfig))
}
