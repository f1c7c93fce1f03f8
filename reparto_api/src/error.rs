use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reparto_planner::route_optimizer::OptimizeError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ServiceUnavailable(String),
    BadGateway(String),
    GatewayTimeout(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        let message = error.to_string();
        match error {
            OptimizeError::NoOrders | OptimizeError::MissingCoordinates { .. } => {
                ApiError::BadRequest(message)
            }
            OptimizeError::ProviderNotReady(_) => ApiError::ServiceUnavailable(message),
            OptimizeError::Timeout(_) => ApiError::GatewayTimeout(message),
            OptimizeError::InvalidWaypointOrder { .. } | OptimizeError::Provider(_) => {
                ApiError::BadGateway(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::ServiceUnavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, message).into_response()
            }
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message).into_response(),
            ApiError::GatewayTimeout(message) => {
                (StatusCode::GATEWAY_TIMEOUT, message).into_response()
            }
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
