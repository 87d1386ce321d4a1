//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_core::{ErrorBody, FlowError};

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    FailedPrecondition(String),
    Upstream(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::invalid_argument(&msg))
            }
            AppError::FailedPrecondition(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::failed_precondition(&msg),
            ),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, ErrorBody::unavailable(&msg)),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal(&msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::InvalidInput(msg) => AppError::BadRequest(msg),
            FlowError::InvalidOutput(msg) => AppError::Internal(msg),
            FlowError::Model(e) => AppError::Upstream(e.to_string()),
        }
    }
}
