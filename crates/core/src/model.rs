//! Abstraction over a hosted generative model

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::ModelError;

/// A hosted generative model that can produce schema-constrained JSON.
#[async_trait]
pub trait Model: Send + Sync {
    /// Identifier for logs and health reporting.
    fn id(&self) -> &str;

    /// Send `prompt` and request output conforming to `response_schema`.
    ///
    /// Returns `Ok(Some(value))` when the response carried parseable
    /// JSON, `Ok(None)` when the call succeeded but yielded no structured
    /// output. Transport and API failures are `Err` and propagate.
    async fn generate(
        &self,
        prompt: &str,
        response_schema: &JsonValue,
    ) -> Result<Option<JsonValue>, ModelError>;
}

/// Shared handle to a model implementation.
pub type ModelHandle = Arc<dyn Model>;
