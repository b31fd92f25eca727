//! Catalog store subsystem for catstore
//!
//! The store owns the immutable record set loaded from the root directory
//! and answers filtered, paginated queries over it.
//!
//! # Query pipeline (strict order)
//!
//! 1. Resolve the query's type name against the schema registry
//! 2. Apply the filter to candidates in load order
//! 3. Skip `start_index` matches
//! 4. Yield at most `max_records` matches
//! 5. Return an ordered result collection
//!
//! # Invariants
//!
//! - Construction is fail-fast; no partially constructed store
//! - Result size reflects the post-filter, post-pagination count
//! - Identical queries over an unchanged store return identical results

mod errors;
mod result;
mod store;

pub use errors::{StoreError, StoreResult};
pub use result::{RecordCollection, RecordCursor};
pub use store::CatalogStore;
