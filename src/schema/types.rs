//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string, trimmed during normalization
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point (accepts integer values)
//! - email: string constrained to a mailbox shape
//! - enum: string restricted to a declared set of variants

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported field types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// String holding an email address
    Email,
    /// String restricted to a closed set of variants
    Enum {
        /// Allowed variants, matched after trimming
        allowed: Vec<String>,
    },
}

impl FieldType {
    /// Returns the type name used in violation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Email => "email",
            FieldType::Enum { .. } => "enum",
        }
    }

    /// Whether JSON input for this type is expected to be a string.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Email | FieldType::Enum { .. }
        )
    }
}

/// A single field declaration: name, type, and constraint set.
///
/// Declaration order within a schema determines violation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as it appears in the input object
    pub name: String,
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Minimum string length (after trimming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    /// Maximum string length (after trimming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    /// Minimum numeric value (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum numeric value (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regex the (trimmed) value must contain a match of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Violation wording when `pattern` fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_hint: Option<String>,
    /// Name of a sibling field this field must equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_match: Option<String>,
    /// Accept numeric strings for int/float fields and coerce them
    #[serde(default)]
    pub coerce_numeric: bool,
}

impl FieldDef {
    /// Create a required field of the given type.
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            min_len: None,
            max_len: None,
            min: None,
            max: None,
            pattern: None,
            pattern_hint: None,
            must_match: None,
            coerce_numeric: false,
        }
    }

    /// Create an optional field of the given type.
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, field_type)
        }
    }

    /// Set the minimum trimmed length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Set the maximum trimmed length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set the inclusive numeric range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Require the value to contain a match of `pattern`, reporting
    /// `hint` when it does not.
    pub fn with_pattern(mut self, pattern: impl Into<String>, hint: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self.pattern_hint = Some(hint.into());
        self
    }

    /// Require the value to equal the named sibling field.
    pub fn matching(mut self, other: impl Into<String>) -> Self {
        self.must_match = Some(other.into());
        self
    }

    /// Accept numeric strings and coerce them to the declared type.
    pub fn coercing_numeric(mut self) -> Self {
        self.coerce_numeric = true;
        self
    }
}

/// Complete schema definition for one input shape.
///
/// Fields are an ordered list: declaration order is the order violations
/// are reported in and the order normalized output fields are emitted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema identifier (e.g. "login")
    pub schema_id: String,
    /// Schema version
    pub schema_version: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered field declarations
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema.
    pub fn new(
        schema_id: impl Into<String>,
        schema_version: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            schema_id: schema_id.into(),
            schema_version: schema_version.into(),
            description: None,
            fields,
        }
    }

    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates the schema definition itself (not an input document).
    ///
    /// A failure here is programmer error and surfaces as a fault at
    /// registration time, never as a `FieldViolation`.
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.schema_id.is_empty() {
            return Err("schema_id must not be empty".into());
        }
        if self.schema_version.is_empty() {
            return Err("schema_version must not be empty".into());
        }
        if self.fields.is_empty() {
            return Err("schema must declare at least one field".into());
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(format!("field at index {} has an empty name", i));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("duplicate field '{}'", field.name));
            }
            if let FieldType::Enum { allowed } = &field.field_type {
                if allowed.is_empty() {
                    return Err(format!("enum field '{}' has no allowed variants", field.name));
                }
            }
            if let Some(target) = &field.must_match {
                if target == &field.name {
                    return Err(format!("field '{}' cannot match itself", field.name));
                }
                if self.field(target).is_none() {
                    return Err(format!(
                        "field '{}' must match undeclared field '{}'",
                        field.name, target
                    ));
                }
            }
            if let (Some(min), Some(max)) = (field.min_len, field.max_len) {
                if min > max {
                    return Err(format!("field '{}': min_len exceeds max_len", field.name));
                }
            }
            if let (Some(min), Some(max)) = (field.min, field.max) {
                if min > max {
                    return Err(format!("field '{}': min exceeds max", field.name));
                }
            }
            if let Some(pattern) = &field.pattern {
                Regex::new(pattern).map_err(|e| {
                    format!("field '{}': invalid pattern: {}", field.name, e)
                })?;
            }
        }

        Ok(())
    }
}
