//! catstore - A file-backed, read-only catalog record store
//!
//! Records are loaded once from a root directory at store construction and
//! queried with declarative filters plus offset/limit pagination.

pub mod filter;
pub mod geo;
pub mod loader;
pub mod observability;
pub mod query;
pub mod record;
pub mod schema;
pub mod store;
