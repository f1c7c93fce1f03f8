use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    Orders,
    Config,
}

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        #[arg(value_enum, default_value_t = SchemaKind::Orders)]
        kind: SchemaKind,

        /// Output file
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { kind, out } => {
            let schema = match kind {
                SchemaKind::Orders => reparto_planner::json::schema::generate_orders_json_schema()?,
                SchemaKind::Config => reparto_planner::json::schema::generate_config_json_schema()?,
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
