//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Reading trace JSON from disk or memory
//! - Validating the document structure
//! - Lazy per-channel length validation

pub mod schema;
pub mod trace_store;

// Re-export main types
pub use schema::{RawChannel, RawTraceDocument};
pub use trace_store::{load_trace, parse_trace_bytes, Trace, TraceSource};
