//! JSON error envelope returned by every failing endpoint

use serde::{Deserialize, Serialize};

/// Error envelope: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// The payload did not match the declared input shape.
    pub fn invalid_argument(message: &str) -> Self {
        Self::new("invalid-argument", message)
    }

    /// Missing or invalid service credentials.
    pub fn unauthenticated(message: &str) -> Self {
        Self::new("unauthenticated", message)
    }

    /// The caller exceeded the request quota.
    pub fn resource_exhausted(message: &str) -> Self {
        Self::new("resource-exhausted", message)
    }

    /// The service is missing configuration it needs for this call.
    pub fn failed_precondition(message: &str) -> Self {
        Self::new("failed-precondition", message)
    }

    /// An upstream dependency failed.
    pub fn unavailable(message: &str) -> Self {
        Self::new("unavailable", message)
    }

    /// Unexpected internal failure.
    pub fn internal(message: &str) -> Self {
        Self::new("internal", message)
    }
}
