//! The catalog record type

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::Extent;

use super::attribute::{AttributePath, AttributeValue};

/// One catalog entry: a stable identifier, typed attributes and an optional
/// spatial extent.
///
/// The identifier is extracted from the `identifier.value` literal at load
/// time, is globally unique within a store, and never changes afterwards. The
/// extent is carried beside the attributes; no attribute name is reserved
/// for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier (URN-UUID form, e.g. `urn:uuid:<hex>`)
    id: String,
    /// Attribute values by name
    attributes: BTreeMap<String, AttributeValue>,
    /// Spatial extent, if the source file declared one
    extent: Option<Extent>,
}

impl Record {
    /// Creates a new record
    pub fn new(
        id: impl Into<String>,
        attributes: BTreeMap<String, AttributeValue>,
        extent: Option<Extent>,
    ) -> Self {
        Self {
            id: id.into(),
            attributes,
            extent,
        }
    }

    /// Returns the record identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the spatial extent, if any
    pub fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    /// Returns a top-level attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Returns all attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Resolves a dotted attribute path to a scalar literal.
    ///
    /// Returns None when any path segment is absent or the path ends on a
    /// complex value.
    pub fn resolve(&self, path: &AttributePath) -> Option<&Value> {
        let head = path.head()?;
        self.attributes.get(head)?.resolve(path.tail())
    }

    /// Convenience accessor for the scalar literal of an attribute, reading
    /// through the `value` sub-property for complex attributes.
    pub fn literal_of(&self, name: &str) -> Option<&Value> {
        match self.attributes.get(name)? {
            AttributeValue::Simple(value) => Some(value),
            complex => complex.property("value")?.as_simple(),
        }
    }

    /// String form of [`Record::literal_of`], for string literals
    pub fn literal_str(&self, name: &str) -> Option<&str> {
        self.literal_of(name)?.as_str()
    }
}
