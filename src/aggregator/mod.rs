//! Aggregation of trace channels into plottable series.
//!
//! This module transforms loaded traces into:
//! - Elapsed-time axes (from a frame-time channel)
//! - Per-frame channel sums
//! - Debiased EMA-smoothed series
//! - Summary statistics

pub mod channels;
pub mod smoother;
pub mod stats;
pub mod timeline;

// Re-export main types and functions
pub use channels::sum_channels;
pub use smoother::{smooth_series, validate_weight};
pub use stats::{calculate_series_stats, relative_change, SeriesStats};
pub use timeline::{reconstruct_timeline, TIME_AXIS_SCALE};
