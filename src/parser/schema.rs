//! Input JSON schema definitions for recorded frame traces.
//!
//! A trace document looks like:
//!
//! ```json
//! {
//!   "frame_count": 3,
//!   "events": {
//!     "/onFrameRender/gpu_time": { "records": [16.1, 16.4, 15.9] }
//!   }
//! }
//! ```
//!
//! Every other top-level or per-channel field is ignored.

use serde::Deserialize;
use serde_json::Value;

/// Top-level trace document as it appears on disk
///
/// Fields are kept as untyped values so that missing or wrongly typed
/// fields surface as `TraceError::MalformedTrace` rather than a generic
/// JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTraceDocument {
    /// Number of recorded frames
    #[serde(default)]
    pub frame_count: Option<Value>,

    /// Channel name to channel object, decoded lazily per channel
    #[serde(default)]
    pub events: Option<Value>,
}

/// A single channel object inside `events`
#[derive(Debug, Clone, Deserialize)]
pub struct RawChannel {
    /// Per-frame values in frame order
    #[serde(default)]
    pub records: Option<Vec<f64>>,
}
