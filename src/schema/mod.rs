//! Schema subsystem: declarative input schemas and the aggregating validator
//!
//! # Design Principles
//!
//! - Schemas are immutable once registered; constructed at startup
//! - Validation is a single pass that collects every violation, never
//!   fail-fast: the caller shows the user all problems at once
//! - Invalid input is a normal outcome (`ValidationOutcome::Invalid`),
//!   never a fault; faults are reserved for caller misuse
//! - Successful validation yields a normalized copy: unknown fields
//!   stripped, strings trimmed, numeric strings coerced where declared
//! - Deterministic: violation order follows schema declaration order

mod catalog;
mod errors;
mod registry;
mod types;
mod validator;

pub use catalog::{login_schema, registration_schema, builtin_registry};
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use registry::{RegisteredSchema, SchemaRegistry};
pub use types::{FieldDef, FieldType, Schema};
pub use validator::{FieldViolation, SchemaValidator, ValidationOutcome};
