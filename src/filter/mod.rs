//! Filter subsystem for catstore
//!
//! Declarative boolean predicates over catalog records: attribute-path
//! equality, spatial bounding-box intersection, and boolean composition.
//! Evaluation is a pure function of (record, filter); no I/O, no mutation.
//!
//! # Matching rules
//!
//! - `All` matches every record
//! - Equality is strict, no type coercion
//! - An absent attribute path is a non-match, never an error
//! - A bbox filter only matches records with an extent in the same CRS

mod ast;
mod evaluator;

pub use ast::Filter;
pub use evaluator::FilterEvaluator;
