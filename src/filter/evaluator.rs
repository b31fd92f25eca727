//! Predicate evaluation against records
//!
//! Strict matching: exact equality, no type coercion. A filter referencing
//! an absent attribute path or a record without a spatial extent evaluates
//! to false rather than erroring.

use crate::record::Record;

use super::ast::Filter;

/// Evaluates filters against records
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Checks whether a record matches a filter
    pub fn matches(record: &Record, filter: &Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::PropertyEquals { path, literal } => match record.resolve(path) {
                Some(value) => value == literal,
                None => false, // Absent path = no match
            },
            Filter::BBoxIntersects { bbox, crs } => match record.extent() {
                Some(extent) => extent.crs_matches(crs) && extent.bbox.intersects(bbox),
                None => false, // No extent = no match
            },
            Filter::And(filters) => filters.iter().all(|f| Self::matches(record, f)),
            Filter::Or(filters) => filters.iter().any(|f| Self::matches(record, f)),
            Filter::Not(inner) => !Self::matches(record, inner),
        }
    }
}
