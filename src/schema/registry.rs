//! Schema registry holding the record schemas a store exposes
//!
//! The registry is keyed by type name. This crate registers exactly one
//! built-in schema, the Dublin-Core-flavoured "Record" schema, but the
//! registry itself is generic over any number of them.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::{AttributeDef, RecordSchema};

/// Type name of the built-in record schema
pub const RECORD_TYPE_NAME: &str = "Record";

/// Builds the built-in "Record" schema.
///
/// `identifier` and `title` are complex attributes holding a `value` literal;
/// `type`, `abstract`, `subject` and `format` are plain literals.
pub fn record_schema() -> RecordSchema {
    let mut attributes = HashMap::new();
    attributes.insert("identifier".into(), AttributeDef::required_value_holder());
    attributes.insert("title".into(), AttributeDef::optional_value_holder());
    attributes.insert("type".into(), AttributeDef::required_literal());
    attributes.insert("abstract".into(), AttributeDef::optional_literal());
    attributes.insert("subject".into(), AttributeDef::optional_literal());
    attributes.insert("format".into(), AttributeDef::optional_literal());
    RecordSchema::new(RECORD_TYPE_NAME, attributes)
}

/// In-memory registry of record schemas, keyed by type name
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: HashMap<String, RecordSchema>,
    /// Type names in registration order, for deterministic iteration
    order: Vec<String>,
}

impl SchemaRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a registry with the built-in "Record" schema registered
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(record_schema())
            .expect("built-in schema is structurally valid");
        registry
    }

    /// Registers a schema.
    ///
    /// Fails if the schema is structurally invalid or the type name is
    /// already taken; registered schemas are immutable.
    pub fn register(&mut self, schema: RecordSchema) -> SchemaResult<()> {
        schema.validate_structure()?;

        if self.schemas.contains_key(&schema.type_name) {
            return Err(SchemaError::DuplicateTypeName(schema.type_name));
        }

        self.order.push(schema.type_name.clone());
        self.schemas.insert(schema.type_name.clone(), schema);
        Ok(())
    }

    /// Gets a schema by type name
    pub fn get(&self, type_name: &str) -> Option<&RecordSchema> {
        self.schemas.get(type_name)
    }

    /// Checks whether a type name is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    /// Returns all registered schemas in registration order
    pub fn all_schemas(&self) -> impl Iterator<Item = &RecordSchema> {
        self.order.iter().filter_map(|name| self.schemas.get(name))
    }

    /// Returns the number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no schemas are registered
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
