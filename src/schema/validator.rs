//! Aggregating schema validator
//!
//! Validation semantics:
//! - Every declared field is checked regardless of earlier failures;
//!   one violation per broken constraint, in declaration order
//! - A type failure suppresses only that field's value constraints
//! - Success yields a normalized copy: unknown fields stripped, strings
//!   trimmed, numeric strings coerced where the schema says so
//! - Invalid input is an ordinary outcome, not a fault
//! - Pure function of (schema, input); deterministic

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::errors::{SchemaError, SchemaResult};
use super::registry::{RegisteredSchema, SchemaRegistry};
use super::types::{FieldDef, FieldType};

/// A single constraint failure tied to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field name (or "$root" for a non-object input)
    pub field: String,
    /// Display-ready message
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating one input against one schema.
///
/// `Invalid` always carries at least one violation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Input satisfied every constraint; carries the normalized copy
    Valid(Value),
    /// One entry per broken constraint, in schema declaration order
    Invalid(Vec<FieldViolation>),
}

impl ValidationOutcome {
    /// Whether validation succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// Returns the violations, if any.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ValidationOutcome::Valid(_) => &[],
            ValidationOutcome::Invalid(v) => v,
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Returns the JSON type name for violation messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Schema validator backed by a read-only registry.
pub struct SchemaValidator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator over the given registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validates an input value against a registered schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` only for caller misuse:
    /// - schema ID not registered (GATE_UNKNOWN_SCHEMA)
    /// - schema version not registered (GATE_UNKNOWN_SCHEMA_VERSION)
    ///
    /// Invalid input is reported through `ValidationOutcome::Invalid`.
    pub fn validate(
        &self,
        schema_id: &str,
        schema_version: &str,
        input: &Value,
    ) -> SchemaResult<ValidationOutcome> {
        if !self.registry.schema_id_exists(schema_id) {
            return Err(SchemaError::unknown_schema(schema_id));
        }
        let registered = self
            .registry
            .get(schema_id, schema_version)
            .ok_or_else(|| SchemaError::unknown_version(schema_id, schema_version))?;

        Ok(Self::validate_against(registered, input))
    }

    /// Validates an input value against one compiled schema directly.
    pub fn validate_against(registered: &RegisteredSchema, input: &Value) -> ValidationOutcome {
        let schema = registered.schema();

        let obj = match input.as_object() {
            Some(obj) => obj,
            None => {
                return ValidationOutcome::Invalid(vec![FieldViolation::new(
                    "$root",
                    format!("expected an object, got {}", json_type_name(input)),
                )]);
            }
        };

        let mut violations = Vec::new();
        let mut normalized = Map::new();

        for field in &schema.fields {
            match obj.get(&field.name) {
                None => {
                    if field.required {
                        violations.push(FieldViolation::new(&field.name, "is required"));
                    }
                }
                Some(value) => {
                    if let Some(norm) =
                        check_field(registered, field, value, obj, &mut violations)
                    {
                        normalized.insert(field.name.clone(), norm);
                    }
                }
            }
        }

        if violations.is_empty() {
            ValidationOutcome::Valid(Value::Object(normalized))
        } else {
            ValidationOutcome::Invalid(violations)
        }
    }
}

/// Checks one present field. Returns the normalized value when the type
/// check passed; constraint failures are appended to `violations`.
fn check_field(
    registered: &RegisteredSchema,
    field: &FieldDef,
    value: &Value,
    siblings: &Map<String, Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Value> {
    match &field.field_type {
        FieldType::String | FieldType::Email | FieldType::Enum { .. } => {
            let s = match value.as_str() {
                Some(s) => s,
                None => {
                    violations.push(type_violation(field, value));
                    return None;
                }
            };
            let trimmed = s.trim().to_string();

            match &field.field_type {
                FieldType::Email => {
                    if !email_regex().is_match(&trimmed) {
                        violations.push(FieldViolation::new(
                            &field.name,
                            "must be a valid email address",
                        ));
                    }
                }
                FieldType::Enum { allowed } => {
                    if !allowed.iter().any(|a| a == &trimmed) {
                        violations.push(FieldViolation::new(
                            &field.name,
                            format!("must be one of: {}", allowed.join(", ")),
                        ));
                    }
                }
                _ => {}
            }

            let len = trimmed.chars().count();
            if let Some(min) = field.min_len {
                if len < min {
                    violations.push(FieldViolation::new(
                        &field.name,
                        format!("must be at least {} characters", min),
                    ));
                }
            }
            if let Some(max) = field.max_len {
                if len > max {
                    violations.push(FieldViolation::new(
                        &field.name,
                        format!("must be at most {} characters", max),
                    ));
                }
            }
            if let Some(regex) = registered.pattern(&field.name) {
                if !regex.is_match(&trimmed) {
                    let message = field
                        .pattern_hint
                        .clone()
                        .unwrap_or_else(|| "does not match the expected format".into());
                    violations.push(FieldViolation::new(&field.name, message));
                }
            }
            if let Some(target) = &field.must_match {
                let other = siblings.get(target).and_then(|v| v.as_str()).map(str::trim);
                if other != Some(trimmed.as_str()) {
                    violations.push(FieldViolation::new(
                        &field.name,
                        format!("must match {}", target),
                    ));
                }
            }

            Some(Value::String(trimmed))
        }
        FieldType::Int => {
            let n = match coerce_int(value, field.coerce_numeric) {
                Some(n) => n,
                None => {
                    violations.push(type_violation(field, value));
                    return None;
                }
            };
            check_range(field, n as f64, violations);
            Some(Value::from(n))
        }
        FieldType::Float => {
            let x = match coerce_float(value, field.coerce_numeric) {
                Some(x) => x,
                None => {
                    violations.push(type_violation(field, value));
                    return None;
                }
            };
            check_range(field, x, violations);
            Some(Value::from(x))
        }
        FieldType::Bool => match value.as_bool() {
            Some(b) => Some(Value::Bool(b)),
            None => {
                violations.push(type_violation(field, value));
                None
            }
        },
    }
}

fn check_range(field: &FieldDef, value: f64, violations: &mut Vec<FieldViolation>) {
    if let Some(min) = field.min {
        if value < min {
            violations.push(FieldViolation::new(
                &field.name,
                format!("must be at least {}", min),
            ));
        }
    }
    if let Some(max) = field.max {
        if value > max {
            violations.push(FieldViolation::new(
                &field.name,
                format!("must be at most {}", max),
            ));
        }
    }
}

fn type_violation(field: &FieldDef, value: &Value) -> FieldViolation {
    FieldViolation::new(
        &field.name,
        format!(
            "expected {}, got {}",
            field.field_type.type_name(),
            json_type_name(value)
        ),
    )
}

fn coerce_int(value: &Value, coerce: bool) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if coerce {
        if let Some(s) = value.as_str() {
            return s.trim().parse().ok();
        }
    }
    None
}

fn coerce_float(value: &Value, coerce: bool) -> Option<f64> {
    if let Some(x) = value.as_f64() {
        return Some(x);
    }
    if coerce {
        if let Some(s) = value.as_str() {
            // non-finite values have no JSON representation
            return s.trim().parse().ok().filter(|x: &f64| x.is_finite());
        }
    }
    None
}
