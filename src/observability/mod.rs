//! Observability subsystem for catstore
//!
//! Structured, synchronous JSON logging with deterministic field ordering.
//! One log line = one event.

mod logger;

pub use logger::{Logger, Severity};
