//! Patient record extraction flow

use serde_json::Value as JsonValue;

use intake_core::{ExtractionRequest, FlowError, ModelHandle, PatientRecord, flow};

use super::prompt::build_prompt;

/// Externally visible flow name
pub const FLOW_NAME: &str = "extractPatientInfo";

/// The extraction flow: schema-checked request in, patient record out.
///
/// The model is asked for output matching the record schema. A call that
/// succeeds without usable output falls back to the all-null record;
/// transport and API failures propagate.
pub struct ExtractPatientFlow {
    model: ModelHandle,
}

impl ExtractPatientFlow {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    /// Identifier of the backing model, for health reporting.
    pub fn model_id(&self) -> &str {
        self.model.id()
    }

    /// Run the flow against a raw caller payload.
    pub async fn run(&self, payload: JsonValue) -> Result<PatientRecord, FlowError> {
        flow::run(FLOW_NAME, payload, |request: ExtractionRequest| {
            self.extract(request)
        })
        .await
    }

    async fn extract(&self, request: ExtractionRequest) -> Result<PatientRecord, FlowError> {
        let prompt = build_prompt(&request.pdf_text);
        let schema = PatientRecord::response_schema();

        let record = match self.model.generate(&prompt, &schema).await? {
            Some(value) => match serde_json::from_value::<PatientRecord>(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(error = %e, "model output did not match the record shape");
                    PatientRecord::empty()
                }
            },
            None => {
                tracing::warn!("model returned no structured output");
                PatientRecord::empty()
            }
        };

        tracing::debug!(empty = record.is_empty(), "extraction complete");

        Ok(record)
    }
}
