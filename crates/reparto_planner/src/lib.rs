pub mod capacity_grouper;
pub mod day_planner;
pub mod fallback;
pub mod format;
pub mod itinerary;
pub mod json;
pub mod navigation;
pub mod order;
pub mod planner_config;
pub mod route_group;
pub mod route_optimizer;

#[cfg(test)]
pub(crate) mod test_utils;
