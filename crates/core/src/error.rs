use thiserror::Error;

/// Failures from the hosted model boundary.
///
/// "The model answered but said nothing" is not an error here; see
/// [`crate::Model::generate`]. These variants all propagate to the caller.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The request never completed (DNS, TLS, connect, body I/O).
    #[error("model request failed: {0}")]
    Transport(String),

    /// The model endpoint rejected the call (auth, quota, server error).
    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The HTTP response body could not be decoded.
    #[error("failed to decode model response: {0}")]
    ResponseParse(String),
}

/// Failures at a flow's schema-checked boundaries.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The payload did not match the flow's input schema.
    #[error("invalid flow input: {0}")]
    InvalidInput(String),

    /// The handler's output did not match the flow's output schema.
    #[error("invalid flow output: {0}")]
    InvalidOutput(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
