use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    distance::DistanceArgs, generate::GenerateSubcommands, group::GroupArgs,
    navigation_url::NavigationUrlArgs, plan::PlanArgs,
};

mod config;
mod distance;
mod file_utils;
mod generate;
mod group;
mod navigation_url;
mod parsers;
mod plan;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a day's orders into vehicle runs and route every run
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    /// Group orders into vehicle runs without routing them
    Group {
        #[command(flatten)]
        args: GroupArgs,
    },
    /// Print the Google Maps links of a saved plan
    NavigationUrl {
        #[command(flatten)]
        args: NavigationUrlArgs,
    },
    /// Great-circle distance between two points
    Distance {
        #[command(flatten)]
        args: DistanceArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Plan { args }) => plan::run(args).await?,
        Some(Commands::Group { args }) => group::run(args)?,
        Some(Commands::NavigationUrl { args }) => navigation_url::run(args)?,
        Some(Commands::Distance { args }) => distance::run(args),
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
