//! Record schema subsystem for catstore
//!
//! Schemas describe the typed attribute shape of catalog records. Attributes
//! are either literals (scalar values) or complex attributes carrying named,
//! typed sub-properties.
//!
//! # Design Principles
//!
//! - Schemas are fixed at store construction, never mutated afterwards
//! - The registry exposes exactly one built-in schema ("Record")
//! - Every record loaded from disk is validated against its schema

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{record_schema, SchemaRegistry, RECORD_TYPE_NAME};
pub use types::{AttributeDef, AttributeType, RecordSchema};
