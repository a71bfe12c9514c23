//! Schema subsystem error types
//!
//! Error codes:
//! - GATE_UNKNOWN_SCHEMA (REJECT)
//! - GATE_UNKNOWN_SCHEMA_VERSION (REJECT)
//! - GATE_SCHEMA_INVALID (FATAL)
//! - GATE_SCHEMA_IMMUTABLE (REJECT)
//!
//! These are faults for caller misuse. Invalid *input* is never a
//! `SchemaError`; it is reported through `ValidationOutcome::Invalid`.

use std::fmt;

/// Severity levels for schema faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller request rejected
    Reject,
    /// Startup must abort (malformed schema definitions)
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Closed set of schema fault codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema ID not registered
    GateUnknownSchema,
    /// Schema version not registered
    GateUnknownSchemaVersion,
    /// Schema definition itself is malformed
    GateSchemaInvalid,
    /// Attempt to re-register an existing schema version
    GateSchemaImmutable,
}

impl SchemaErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::GateUnknownSchema => "GATE_UNKNOWN_SCHEMA",
            SchemaErrorCode::GateUnknownSchemaVersion => "GATE_UNKNOWN_SCHEMA_VERSION",
            SchemaErrorCode::GateSchemaInvalid => "GATE_SCHEMA_INVALID",
            SchemaErrorCode::GateSchemaImmutable => "GATE_SCHEMA_IMMUTABLE",
        }
    }

    /// Returns the severity level for this code.
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::GateSchemaInvalid => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema fault with code and context
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    schema_id: Option<String>,
    schema_version: Option<String>,
}

impl SchemaError {
    /// Create an unknown schema error.
    pub fn unknown_schema(schema_id: impl Into<String>) -> Self {
        let id = schema_id.into();
        Self {
            code: SchemaErrorCode::GateUnknownSchema,
            message: format!("Schema '{}' not found", id),
            schema_id: Some(id),
            schema_version: None,
        }
    }

    /// Create an unknown schema version error.
    pub fn unknown_version(schema_id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = schema_id.into();
        let ver = version.into();
        Self {
            code: SchemaErrorCode::GateUnknownSchemaVersion,
            message: format!("Schema '{}' version '{}' not found", id, ver),
            schema_id: Some(id),
            schema_version: Some(ver),
        }
    }

    /// Create a malformed schema definition error (FATAL).
    pub fn invalid(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::GateSchemaInvalid,
            message: format!("Malformed schema '{}': {}", origin.into(), reason.into()),
            schema_id: None,
            schema_version: None,
        }
    }

    /// Create a schema immutability error.
    pub fn immutable(schema_id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = schema_id.into();
        let ver = version.into();
        Self {
            code: SchemaErrorCode::GateSchemaImmutable,
            message: format!("Schema '{}' version '{}' is immutable", id, ver),
            schema_id: Some(id),
            schema_version: Some(ver),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema ID if applicable.
    pub fn schema_id(&self) -> Option<&str> {
        self.schema_id.as_deref()
    }

    /// Returns the schema version if applicable.
    pub fn schema_version(&self) -> Option<&str> {
        self.schema_version.as_deref()
    }

    /// Returns whether this fault must abort startup.
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
