//! Gateway error types
//!
//! These are caller-misuse faults (bad envelope, unknown operation,
//! unregistered schema). They are never reinterpreted as a
//! `ClassifiedError`: classification is for downstream failures, not
//! for programmer errors.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway errors
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Envelope is not valid JSON or is missing required parts
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Operation name not recognized
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Schema subsystem fault (unknown schema, malformed definition)
    #[error("Schema error: {0}")]
    Schema(String),
}

impl GatewayError {
    /// Create an invalid request error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        GatewayError::InvalidRequest(reason.into())
    }

    /// Create an unknown operation error.
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        GatewayError::UnknownOperation(op.into())
    }

    /// Returns the string code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "GATE_INVALID_REQUEST",
            GatewayError::UnknownOperation(_) => "GATE_UNKNOWN_OPERATION",
            GatewayError::Schema(_) => "GATE_SCHEMA_ERROR",
        }
    }
}

impl From<SchemaError> for GatewayError {
    fn from(err: SchemaError) -> Self {
        GatewayError::Schema(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            GatewayError::invalid_request("x").code(),
            "GATE_INVALID_REQUEST"
        );
        assert_eq!(
            GatewayError::unknown_operation("drop").code(),
            "GATE_UNKNOWN_OPERATION"
        );
    }

    #[test]
    fn test_schema_error_propagation() {
        let err: GatewayError = SchemaError::unknown_schema("login").into();
        assert_eq!(err.code(), "GATE_SCHEMA_ERROR");
        assert!(err.to_string().contains("login"));
    }
}
