//! Schema registry: startup-time schema registration and lookup
//!
//! Schemas may be registered programmatically or loaded from a directory
//! of JSON files. Registration validates the schema definition, compiles
//! its regex patterns once, and freezes it: re-registering an existing
//! (schema_id, schema_version) pair is rejected. After startup the
//! registry is read-only and safe to share across concurrent validations.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;

/// A registered schema plus its compiled pattern constraints.
#[derive(Debug)]
pub struct RegisteredSchema {
    schema: Schema,
    patterns: HashMap<String, Regex>,
}

impl RegisteredSchema {
    fn compile(schema: Schema) -> SchemaResult<Self> {
        let mut patterns = HashMap::new();
        for field in &schema.fields {
            if let Some(pattern) = &field.pattern {
                let regex = Regex::new(pattern).map_err(|e| {
                    SchemaError::invalid(&schema.schema_id, format!("field '{}': {}", field.name, e))
                })?;
                patterns.insert(field.name.clone(), regex);
            }
        }
        Ok(Self { schema, patterns })
    }

    /// Returns the schema definition.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the compiled pattern for a field, if one is declared.
    pub fn pattern(&self, field: &str) -> Option<&Regex> {
        self.patterns.get(field)
    }
}

/// In-memory schema registry indexed by (schema_id, schema_version).
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<(String, String), RegisteredSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema, validating its structure and compiling its
    /// patterns.
    ///
    /// # Errors
    ///
    /// - `GATE_SCHEMA_INVALID` if the definition is malformed
    /// - `GATE_SCHEMA_IMMUTABLE` if the (id, version) pair already exists
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        schema
            .validate_structure()
            .map_err(|e| SchemaError::invalid(&schema.schema_id, e))?;

        let key = (schema.schema_id.clone(), schema.schema_version.clone());
        if self.schemas.contains_key(&key) {
            return Err(SchemaError::immutable(&schema.schema_id, &schema.schema_version));
        }

        self.schemas.insert(key, RegisteredSchema::compile(schema)?);
        Ok(())
    }

    /// Loads every `*.json` schema file from a directory.
    ///
    /// Returns the number of schemas loaded. Malformed files are FATAL:
    /// a registry with a half-loaded schema set must not serve traffic.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        let entries = fs::read_dir(dir).map_err(|e| {
            SchemaError::invalid(dir.display().to_string(), format!("cannot read directory: {}", e))
        })?;

        let mut loaded = 0;
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::invalid(dir.display().to_string(), format!("cannot read entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            let content = fs::read_to_string(&path).map_err(|e| {
                SchemaError::invalid(path.display().to_string(), format!("cannot read file: {}", e))
            })?;
            let schema: Schema = serde_json::from_str(&content).map_err(|e| {
                SchemaError::invalid(path.display().to_string(), format!("invalid JSON: {}", e))
            })?;

            self.register(schema)?;
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Gets a registered schema by ID and version.
    pub fn get(&self, schema_id: &str, schema_version: &str) -> Option<&RegisteredSchema> {
        self.schemas
            .get(&(schema_id.to_string(), schema_version.to_string()))
    }

    /// Checks whether a specific schema version is registered.
    pub fn exists(&self, schema_id: &str, schema_version: &str) -> bool {
        self.get(schema_id, schema_version).is_some()
    }

    /// Checks whether any version of a schema ID is registered.
    pub fn schema_id_exists(&self, schema_id: &str) -> bool {
        self.schemas.keys().any(|(id, _)| id == schema_id)
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
