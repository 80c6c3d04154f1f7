//! Baseline-versus-variant comparison of frame timing traces.
//!
//! For each entry the builder reconstructs the trace's own time axis, sums
//! the requested channels and smooths the sum. The resulting pairs are
//! overlaid by an external plotting tool, or persisted as a
//! [`ComparisonReport`].
//!
//! # Example
//! ```ignore
//! use frame_trace_studio::comparison::{ComparisonBuilder, ComparisonConfig, ComparisonEntry};
//!
//! let config = ComparisonConfig::new("/onFrameRender/gpu_time").with_weight(0.9);
//! let pairs = ComparisonBuilder::new(config).build(&[
//!     ComparisonEntry::new("SVAO (Baseline)", &baseline, ["/VAO/gpu_time", "/SVAO/gpu_time"]),
//!     ComparisonEntry::new("SVAO++", &optimized, ["/VAOPrepass/gpu_time", "/VAO/gpu_time", "/SVAO/gpu_time"]),
//! ])?;
//! ```

mod builder;
mod schema;

// Public API exports
pub use builder::{
    ChannelBreakdown, ComparisonBuilder, ComparisonConfig, ComparisonEntry, ComparisonSeries,
};
pub use schema::{ComparisonReport, ReportSeries};
