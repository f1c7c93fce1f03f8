use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The client could not be initialized (missing key, disabled provider).
    #[error("Routing provider not ready: {0}")]
    NotReady(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// The provider answered but refused the route, e.g. `ZERO_RESULTS`.
    #[error("Routing provider error: {status} - {message}")]
    Status { status: String, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Incomplete response: {0}")]
    IncompleteResponse(&'static str),

    #[error("Too many waypoints: {count} (maximum {max})")]
    TooManyWaypoints { count: usize, max: usize },
}

impl ProviderError {
    /// Status code reported by the provider, when it answered with one.
    pub fn status(&self) -> Option<&str> {
        match self {
            ProviderError::Status { status, .. } => Some(status),
            _ => None,
        }
    }
}
