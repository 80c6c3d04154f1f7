//! Summary statistics for frame timing series.
//!
//! Used for the terminal summary and stored alongside every series in the
//! comparison report, so a baseline and its variants can be compared without
//! looking at the chart.

use serde::{Deserialize, Serialize};

/// Summary statistics of one series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Number of frames
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Upper-middle element of the sorted series
    pub median: f64,

    /// Smallest value
    pub min: f64,

    /// Largest value
    pub max: f64,

    /// Nearest-rank 95th percentile
    pub p95: f64,
}

/// Calculate summary statistics
///
/// **Public** - provides summary statistics
///
/// An empty series yields all-zero statistics.
pub fn calculate_series_stats(series: &[f64]) -> SeriesStats {
    if series.is_empty() {
        return SeriesStats::default();
    }

    let count = series.len();
    let total: f64 = series.iter().sum();

    let mut sorted = series.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    // Nearest rank: ceil(0.95 * n), 1-based
    let p95_rank = ((count as f64) * 0.95).ceil() as usize;
    let p95 = sorted[p95_rank.clamp(1, count) - 1];

    SeriesStats {
        count,
        mean: total / count as f64,
        median: sorted[count / 2],
        min: sorted[0],
        max: sorted[count - 1],
        p95,
    }
}

/// Percentage change from baseline to variant
///
/// Returns 0.0 when the baseline is zero.
pub fn relative_change(baseline: f64, variant: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (variant - baseline) / baseline * 100.0
    }
}

impl SeriesStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the terminal summary
    pub fn summary(&self) -> String {
        format!(
            "Frames: {} | Mean: {:.3} | Median: {:.3} | Min: {:.3} | Max: {:.3} | P95: {:.3}",
            self.count, self.mean, self.median, self.min, self.max, self.p95
        )
    }
}
