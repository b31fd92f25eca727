//! Schema type definitions for catalog records
//!
//! Supported attribute shapes:
//! - literal: a scalar value (string, number, bool)
//! - complex: a named set of sub-properties, each with its own definition
//!
//! Complex attributes model the nested metadata elements found in catalog
//! dialects, e.g. an `identifier` element whose `value` sub-property carries
//! the actual literal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};

/// Attribute shape, either a scalar literal or a complex nested attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AttributeType {
    /// Scalar value
    Literal,
    /// Nested attribute with its own named sub-properties
    Complex {
        /// Sub-property definitions
        properties: HashMap<String, AttributeDef>,
    },
}

impl AttributeType {
    /// Returns the shape name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeType::Literal => "literal",
            AttributeType::Complex { .. } => "complex",
        }
    }

    /// Returns the sub-property definitions for complex attributes
    pub fn properties(&self) -> Option<&HashMap<String, AttributeDef>> {
        match self {
            AttributeType::Literal => None,
            AttributeType::Complex { properties } => Some(properties),
        }
    }
}

/// A single attribute definition: shape plus presence requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Attribute shape
    #[serde(flatten)]
    pub attr_type: AttributeType,
    /// Whether the attribute must be present on every record
    pub required: bool,
}

impl AttributeDef {
    /// Create a required literal attribute
    pub fn required_literal() -> Self {
        Self {
            attr_type: AttributeType::Literal,
            required: true,
        }
    }

    /// Create an optional literal attribute
    pub fn optional_literal() -> Self {
        Self {
            attr_type: AttributeType::Literal,
            required: false,
        }
    }

    /// Create a required complex attribute with the given sub-properties
    pub fn required_complex(properties: HashMap<String, AttributeDef>) -> Self {
        Self {
            attr_type: AttributeType::Complex { properties },
            required: true,
        }
    }

    /// Create an optional complex attribute with the given sub-properties
    pub fn optional_complex(properties: HashMap<String, AttributeDef>) -> Self {
        Self {
            attr_type: AttributeType::Complex { properties },
            required: false,
        }
    }

    /// Create a required complex attribute holding a single required
    /// `value` literal, the shape nested catalog elements use
    pub fn required_value_holder() -> Self {
        Self::required_complex(value_property())
    }

    /// Optional variant of [`AttributeDef::required_value_holder`]
    pub fn optional_value_holder() -> Self {
        Self::optional_complex(value_property())
    }
}

fn value_property() -> HashMap<String, AttributeDef> {
    let mut properties = HashMap::new();
    properties.insert("value".to_string(), AttributeDef::required_literal());
    properties
}

/// Complete schema for one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Type name records of this schema answer to (e.g. "Record")
    pub type_name: String,
    /// Attribute definitions by name
    pub attributes: HashMap<String, AttributeDef>,
}

impl RecordSchema {
    /// Create a new schema
    pub fn new(type_name: impl Into<String>, attributes: HashMap<String, AttributeDef>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes,
        }
    }

    /// Returns the attribute definition for a name, if declared
    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.get(name)
    }

    /// Validates the schema structure itself (not a record).
    ///
    /// Every schema must declare a required complex `identifier` attribute
    /// with a required `value` literal sub-property; the loader extracts the
    /// record identity from it.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        let identifier = self.attributes.get("identifier").ok_or_else(|| {
            SchemaError::invalid_structure(&self.type_name, "must declare an 'identifier' attribute")
        })?;

        if !identifier.required {
            return Err(SchemaError::invalid_structure(
                &self.type_name,
                "'identifier' must be required",
            ));
        }

        let properties = identifier.attr_type.properties().ok_or_else(|| {
            SchemaError::invalid_structure(&self.type_name, "'identifier' must be complex")
        })?;

        match properties.get("value") {
            Some(value) if value.required && value.attr_type == AttributeType::Literal => Ok(()),
            _ => Err(SchemaError::invalid_structure(
                &self.type_name,
                "'identifier' must hold a required 'value' literal",
            )),
        }
    }
}
