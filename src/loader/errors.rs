//! Record loader error types
//!
//! Any failure while loading a record file aborts the whole load, so a
//! store is either fully consistent or not constructed.

use thiserror::Error;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading record files from the root directory
#[derive(Debug, Error)]
pub enum LoadError {
    /// Directory or file could not be read
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("Invalid JSON in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// File content is not a JSON object
    #[error("Record file '{path}' must contain a JSON object")]
    NotAnObject { path: String },

    /// A required attribute is absent
    #[error("Record file '{path}' is missing required attribute '{name}'")]
    MissingAttribute { path: String, name: String },

    /// An attribute not declared by the schema is present
    #[error("Record file '{path}' carries undeclared attribute '{name}'")]
    UndeclaredAttribute { path: String, name: String },

    /// An attribute has the wrong shape (literal vs. complex)
    #[error("Attribute '{name}' in '{path}' must be {expected}, got {actual}")]
    ShapeMismatch {
        path: String,
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The identifier literal is absent or not a string
    #[error("Record file '{path}' has no usable 'identifier.value' literal")]
    MissingIdentifier { path: String },

    /// The identifier is not a URN-UUID
    #[error("Identifier '{id}' in '{path}' is not a urn:uuid identifier")]
    InvalidIdentifier { path: String, id: String },

    /// Two record files share the same identifier
    #[error("Duplicate record identifier '{id}' in '{path}'")]
    DuplicateIdentifier { path: String, id: String },

    /// The extent member could not be interpreted as a bounding box
    #[error("Invalid extent in '{path}': {reason}")]
    InvalidExtent { path: String, reason: String },
}

impl LoadError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid extent error
    pub fn invalid_extent(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExtent {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
