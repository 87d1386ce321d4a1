//! Extraction flow HTTP handler

use std::sync::Arc;

use axum::{Extension, Json, response::IntoResponse};
use serde_json::Value as JsonValue;

use intake_core::FlowError;

use crate::ai::extract::{ExtractPatientFlow, FLOW_NAME};
use crate::error::AppError;

/// POST /flows/extractPatientInfo - Run the extraction flow
///
/// Forwards the caller's payload unmodified to the flow and returns the
/// flow's record verbatim. The flow rejects payloads that do not match
/// its input schema before any model call happens.
pub async fn run(
    Extension(flow): Extension<Option<Arc<ExtractPatientFlow>>>,
    Json(payload): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let flow = flow.ok_or_else(|| {
        AppError::FailedPrecondition("GEMINI_API_KEY not configured".to_string())
    })?;

    let result = flow.run(payload).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(FlowError::InvalidInput(_)) => "invalid-input",
        Err(FlowError::InvalidOutput(_)) => "invalid-output",
        Err(FlowError::Model(_)) => "model-error",
    };
    metrics::counter!("flow_invocations_total", "flow" => FLOW_NAME, "outcome" => outcome)
        .increment(1);

    let record = result?;
    Ok(Json(record))
}
