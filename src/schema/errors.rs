//! Schema error types

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema registration and validation errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Schema definition violates structural rules
    #[error("Invalid schema '{type_name}': {reason}")]
    InvalidStructure { type_name: String, reason: String },

    /// Attempt to register a second schema under an existing type name
    #[error("Schema '{0}' is already registered")]
    DuplicateTypeName(String),
}

impl SchemaError {
    /// Create an invalid structure error
    pub fn invalid_structure(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
