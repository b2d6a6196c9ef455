use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::translate::EngineError;

/// Failures the gateway answers itself, before or instead of the provider
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Only POST allowed")]
    MethodNotAllowed,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Failed to read request body")]
    BodyRead,
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Upgrade required")]
    UpgradeRequired,
    #[error("Bad Request")]
    MissingKey,
    #[error("Hijacking not supported")]
    HijackUnsupported,
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BodyRead | Self::InvalidRequest | Self::UpgradeRequired | Self::MissingKey => {
                StatusCode::BAD_REQUEST
            }
            Self::HijackUnsupported => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Engine(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
