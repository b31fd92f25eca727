//! Query result types
//!
//! A result collection is the ordered outcome of filter-then-paginate. The
//! records themselves are `Arc`-shared with the store, so a collection is a
//! cheap view, not a copy; the cursor borrows the collection and releases
//! that borrow when dropped, no explicit close call required.

use std::sync::Arc;

use crate::record::Record;

/// Ordered collection of records satisfying a query
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Vec<Arc<Record>>,
}

impl RecordCollection {
    /// Creates a collection over the given records
    pub fn new(records: Vec<Arc<Record>>) -> Self {
        Self { records }
    }

    /// Creates an empty collection
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records after filter and pagination
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at a position within this collection
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index).map(Arc::as_ref)
    }

    /// Opens a cursor over the collection in result order
    pub fn cursor(&self) -> RecordCursor<'_> {
        RecordCursor {
            records: &self.records,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = RecordCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Forward cursor over a result collection.
///
/// Dropping the cursor releases it; early termination needs no cleanup call.
#[derive(Debug)]
pub struct RecordCursor<'a> {
    records: &'a [Arc<Record>],
    position: usize,
}

impl<'a> Iterator for RecordCursor<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.position)?;
        self.position += 1;
        Some(record.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordCursor<'_> {}
