//! Named flows with schema-checked boundaries.
//!
//! A flow is an independently invocable unit of logic with declared
//! input and output shapes. [`run`] validates both boundaries: payloads
//! that do not deserialize into the input type are rejected before the
//! handler executes, and handler output is round-tripped through its
//! serialized form before it is returned to the caller.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::Instrument;

use crate::error::FlowError;

/// Run `handler` as the flow `name` against a raw JSON `payload`.
pub async fn run<I, O, F, Fut>(name: &str, payload: JsonValue, handler: F) -> Result<O, FlowError>
where
    I: DeserializeOwned,
    O: Serialize + DeserializeOwned,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, FlowError>>,
{
    let span = tracing::info_span!("flow", flow = name);

    async move {
        let input: I = serde_json::from_value(payload)
            .map_err(|e| FlowError::InvalidInput(e.to_string()))?;

        let output = handler(input).await?;

        // The handler already promises this shape, so a mismatch here is
        // a bug in the flow, not a caller error.
        let value =
            serde_json::to_value(&output).map_err(|e| FlowError::InvalidOutput(e.to_string()))?;
        serde_json::from_value::<O>(value).map_err(|e| FlowError::InvalidOutput(e.to_string()))?;

        tracing::debug!("flow completed");

        Ok(output)
    }
    .instrument(span)
    .await
}
