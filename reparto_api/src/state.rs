use reparto_planner::day_planner::DayPlanner;
use reparto_providers::routing_client::RoutingClient;

pub struct AppState {
    pub planner: DayPlanner<RoutingClient>,
}
