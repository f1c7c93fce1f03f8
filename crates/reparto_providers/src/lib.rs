pub mod as_the_crow_flies;
pub mod coordinates;
pub mod directions_route;
pub mod error;
pub mod google_directions_api;
pub mod haversine;
pub mod routing_client;
pub mod routing_provider;
pub mod routing_provider_kind;
pub mod routing_request;
