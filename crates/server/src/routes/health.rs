//! Health check endpoint

use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::ai::extract::ExtractPatientFlow;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Report whether the service can run its flow
pub async fn check(
    Extension(flow): Extension<Option<Arc<ExtractPatientFlow>>>,
) -> impl IntoResponse {
    match flow {
        Some(flow) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                model: Some(flow.model_id().to_string()),
                reason: None,
            }),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                model: None,
                reason: Some("model client not configured".to_string()),
            }),
        ),
    }
}
