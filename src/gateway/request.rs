//! Gateway request envelope
//!
//! JSON envelope parsing for the supported operations. The operation
//! selects which registered schema the payload is validated against.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{GatewayError, GatewayResult};

/// Supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Login,
    Register,
}

impl Operation {
    /// Returns the wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
        }
    }

    /// Returns the (schema_id, schema_version) this operation validates
    /// against.
    pub fn schema(&self) -> (&'static str, &'static str) {
        match self {
            Operation::Login => ("login", "v1"),
            Operation::Register => ("registration", "v1"),
        }
    }
}

/// A parsed request: operation plus untyped payload.
#[derive(Debug, Clone)]
pub struct Request {
    pub operation: Operation,
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl Request {
    /// Create a request directly.
    pub fn new(operation: Operation, payload: Value) -> Self {
        Self { operation, payload }
    }

    /// Parse a request from a JSON envelope `{ "op": ..., "payload": ... }`.
    ///
    /// # Errors
    ///
    /// - `GATE_INVALID_REQUEST` for unparseable JSON or a missing payload
    /// - `GATE_UNKNOWN_OPERATION` for an unrecognized op name
    pub fn parse(json: &str) -> GatewayResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| GatewayError::invalid_request(format!("Invalid JSON: {}", e)))?;

        let operation = match raw.op.as_str() {
            "login" => Operation::Login,
            "register" => Operation::Register,
            other => return Err(GatewayError::unknown_operation(other)),
        };

        let payload = raw
            .payload
            .ok_or_else(|| GatewayError::invalid_request("Missing payload"))?;

        Ok(Request::new(operation, payload))
    }
}
