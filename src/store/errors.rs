//! Catalog store error types

use thiserror::Error;

use crate::loader::LoadError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the catalog store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The root path is missing or not a directory; construction-time only
    #[error("Invalid store root '{path}': {reason}")]
    Configuration { path: String, reason: String },

    /// Loading the record set failed; the store is not constructed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The query names a type with no registered schema
    #[error("No schema registered for type '{0}'")]
    UnknownType(String),
}

impl StoreError {
    /// Create a configuration error
    pub fn configuration(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for construction-time configuration failures
    pub fn is_configuration(&self) -> bool {
        matches!(self, StoreError::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = StoreError::configuration("/tmp/nope", "not a directory");
        let display = format!("{}", err);
        assert!(display.contains("/tmp/nope"));
        assert!(display.contains("not a directory"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_type_display() {
        let err = StoreError::UnknownType("Dataset".into());
        assert!(format!("{}", err).contains("Dataset"));
        assert!(!err.is_configuration());
    }
}
