use std::path::Path;

use reparto_planner::planner_config::PlannerConfig;
use tracing::info;

/// `--config` first, then the `REPARTO_CONFIG` variable, then the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig, anyhow::Error> {
    let config = match path {
        Some(path) => {
            info!("Loading config {:?}", path);
            PlannerConfig::from_file(path)?
        }
        None => PlannerConfig::from_env()?,
    };

    Ok(config)
}
