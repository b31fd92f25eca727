//! Query descriptor types for catstore
//!
//! A query names a record type and optionally narrows the result with a
//! filter, a start offset and a maximum result count. Defaults are
//! match-all, offset 0 and unbounded.

use serde_json::Value;

use crate::filter::Filter;
use crate::record::AttributePath;
use crate::schema::RECORD_TYPE_NAME;

/// A catalog query: type name, filter and pagination window
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Record type name the query targets
    pub type_name: String,
    /// Filter predicate, `Filter::All` by default
    pub filter: Filter,
    /// Number of matching records to skip before yielding results
    pub start_index: usize,
    /// Maximum number of records to yield, unbounded when None
    pub max_records: Option<usize>,
}

impl Query {
    /// Creates a match-all query for the given type name
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            filter: Filter::All,
            start_index: 0,
            max_records: None,
        }
    }

    /// The match-everything query against the built-in record type
    pub fn all() -> Self {
        Self::new(RECORD_TYPE_NAME)
    }

    /// Sets the filter
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Adds an equality filter on a dotted attribute path
    pub fn filter_eq(self, path: impl Into<AttributePath>, literal: Value) -> Self {
        self.with_filter(Filter::property_equals(path, literal))
    }

    /// Sets the start offset (number of matches to skip)
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets the maximum result count
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

/// Transactional context placeholder.
///
/// The store is read-only, so the token carries no state and has no effect;
/// it keeps `records()` signature-compatible with a writable store
/// abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolationToken {
    /// No transactional context
    #[default]
    AutoCommit,
}
