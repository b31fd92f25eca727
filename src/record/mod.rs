//! Typed catalog record model
//!
//! A record is an immutable identifier, a map of typed attribute values and
//! an optional spatial extent. Attribute values form an explicit tagged
//! structure (simple literal or complex map of sub-attributes) that path
//! resolution walks directly; there is no reflection or dynamic dispatch.

mod attribute;
mod record;

pub use attribute::{AttributePath, AttributeValue};
pub use record::Record;
