//! Comparison report schema definitions.
//!
//! The report is the on-disk hand-off to plotting tools: one entry per
//! compared trace with its time axis, smoothed values and statistics.

use super::builder::{ComparisonConfig, ComparisonSeries};
use crate::aggregator::{relative_change, SeriesStats};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level comparison report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Channel the time axes were reconstructed from
    pub frame_time_channel: String,

    /// EMA weight applied to every series
    pub smoothing_weight: f64,

    /// One series per compared trace; the first is the baseline
    pub series: Vec<ReportSeries>,
}

/// A single series in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSeries {
    pub label: String,

    /// Channels summed for this series
    pub channels: Vec<String>,

    /// Elapsed time per frame
    pub time_axis: Vec<f64>,

    /// Smoothed per-frame values
    pub values: Vec<f64>,

    /// Statistics of the unsmoothed channel sum
    pub stats: SeriesStats,

    /// Mean change relative to the first series, in percent
    pub mean_change_percent: f64,
}

impl ComparisonReport {
    /// Assemble a report from built series
    pub fn new(config: &ComparisonConfig, series: &[ComparisonSeries]) -> Self {
        let baseline_mean = series.first().map(|s| s.stats.mean).unwrap_or(0.0);

        let series = series
            .iter()
            .map(|s| ReportSeries {
                label: s.label.clone(),
                channels: s.channels.clone(),
                time_axis: s.time_axis.clone(),
                values: s.series.clone(),
                stats: s.stats,
                mean_change_percent: relative_change(baseline_mean, s.stats.mean),
            })
            .collect();

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            frame_time_channel: config.frame_time_channel.clone(),
            smoothing_weight: config.smoothing_weight,
            series,
        }
    }

    /// Series other than the baseline
    pub fn variants(&self) -> &[ReportSeries] {
        self.series.get(1..).unwrap_or(&[])
    }
}
