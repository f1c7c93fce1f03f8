use std::future::Future;

use crate::{
    directions_route::DirectionsRoute, error::ProviderError, routing_request::RoutingRequest,
};

/// A service able to compute a multi-stop driving route.
pub trait RoutingProvider: Send + Sync {
    /// Checked before every request. Providers that need an initialized client
    /// (API key, loaded SDK) report [`ProviderError::NotReady`] here instead of
    /// failing on the network call.
    fn ensure_ready(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Maximum number of intermediate stops accepted in one request.
    fn max_waypoints(&self) -> Option<usize> {
        None
    }

    fn route(
        &self,
        request: &RoutingRequest,
    ) -> impl Future<Output = Result<DirectionsRoute, ProviderError>> + Send;
}
