mod error;
mod group;
mod health;
mod optimize_route;
mod plan;
mod state;

use crate::group::group_handler;
use crate::health::health_handler;
use crate::optimize_route::optimize_route_handler;
use crate::plan::plan_handler;
use crate::state::AppState;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use reparto_planner::day_planner::DayPlanner;
use reparto_planner::planner_config::PlannerConfig;
use reparto_planner::route_optimizer::RouteOptimizer;
use reparto_providers::routing_client::RoutingClient;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info, warn};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const API_ADDR_ENV_VAR: &str = "REPARTO_API_ADDR";
const DEFAULT_API_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = PlannerConfig::from_env()?;
    let client = RoutingClient::from_env(&config.provider);
    info!("Routing provider: {}", client.name());

    let planner = DayPlanner::new(RouteOptimizer::new(config, client));
    if let Err(error) = planner.optimizer().ensure_ready() {
        warn!("{}", error);
    }

    let state = Arc::new(AppState { planner });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/optimize-route", post(optimize_route_handler))
        .route("/plan", post(plan_handler))
        .route("/group", post(group_handler))
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let addr = std::env::var(API_ADDR_ENV_VAR).unwrap_or_else(|_| String::from(DEFAULT_API_ADDR));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}
