//! Comparison pipeline: time axis, channel sum and smoothing per entry.

use crate::aggregator::{
    calculate_series_stats, reconstruct_timeline, smooth_series, sum_channels, validate_weight,
    SeriesStats,
};
use crate::parser::Trace;
use crate::utils::error::ComparisonError;
use log::{debug, info, warn};

/// Settings shared by every entry of a comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Channel holding per-frame durations, used for each entry's time axis
    pub frame_time_channel: String,

    /// EMA weight in `[0, 1]`; 0 disables smoothing
    pub smoothing_weight: f64,
}

impl ComparisonConfig {
    /// Create a config with smoothing disabled
    pub fn new(frame_time_channel: impl Into<String>) -> Self {
        Self {
            frame_time_channel: frame_time_channel.into(),
            smoothing_weight: 0.0,
        }
    }

    /// Set smoothing weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.smoothing_weight = weight;
        self
    }
}

/// One trace and the channels summed for it
#[derive(Debug, Clone)]
pub struct ComparisonEntry<'a> {
    /// Legend label, carried through untouched
    pub label: String,

    /// Source trace
    pub trace: &'a Trace,

    /// Channels summed per frame, in summation order
    pub channels: Vec<String>,
}

impl<'a> ComparisonEntry<'a> {
    pub fn new<S: Into<String>>(
        label: impl Into<String>,
        trace: &'a Trace,
        channels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            label: label.into(),
            trace,
            channels: channels.into_iter().map(Into::into).collect(),
        }
    }
}

/// One `(time axis, series)` pair ready for plotting
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries {
    pub label: String,
    pub channels: Vec<String>,

    /// Elapsed time at the end of each frame
    pub time_axis: Vec<f64>,

    /// Smoothed channel sum
    pub series: Vec<f64>,

    /// Statistics of the channel sum before smoothing
    pub stats: SeriesStats,
}

/// Individually smoothed channels of one trace on its own time axis
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelBreakdown {
    pub time_axis: Vec<f64>,
    pub channels: Vec<(String, Vec<f64>)>,
}

/// Builds aligned comparison series from traces
#[derive(Debug, Clone)]
pub struct ComparisonBuilder {
    config: ComparisonConfig,
}

impl ComparisonBuilder {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Build one series per entry, in entry order
    ///
    /// **Public** - main entry point for comparisons
    ///
    /// Entries are independent; their traces may have different frame counts,
    /// so the returned axes may differ in length.
    ///
    /// # Errors
    /// * `ComparisonError::Smooth` - the configured weight is outside `[0, 1]`
    ///   (checked before any entry is processed)
    /// * `ComparisonError::Trace` - an entry references an unknown or
    ///   malformed channel
    ///
    /// # Example
    /// ```ignore
    /// let builder = ComparisonBuilder::new(ComparisonConfig::new("/onFrameRender/gpu_time").with_weight(0.9));
    /// let series = builder.build(&[
    ///     ComparisonEntry::new("Baseline", &baseline, ["/pass/VAO", "/pass/SVAO"]),
    ///     ComparisonEntry::new("Optimized", &optimized, ["/pass/Prepass", "/pass/VAO", "/pass/SVAO"]),
    /// ])?;
    /// ```
    pub fn build(
        &self,
        entries: &[ComparisonEntry<'_>],
    ) -> Result<Vec<ComparisonSeries>, ComparisonError> {
        validate_weight(self.config.smoothing_weight)?;

        if entries.is_empty() {
            warn!("Comparison requested with no entries");
        }

        info!(
            "Building comparison of {} entries (weight {})",
            entries.len(),
            self.config.smoothing_weight
        );

        entries
            .iter()
            .map(|entry| self.build_entry(entry))
            .collect()
    }

    /// Build the series for a single entry
    pub fn build_entry(
        &self,
        entry: &ComparisonEntry<'_>,
    ) -> Result<ComparisonSeries, ComparisonError> {
        let time_axis = self.time_axis(entry.trace)?;
        let summed = sum_channels(entry.trace, entry.channels.as_slice())?;
        let stats = calculate_series_stats(&summed);
        let series = smooth_series(&summed, self.config.smoothing_weight)?;

        debug!("Entry '{}': {}", entry.label, stats.summary());

        Ok(ComparisonSeries {
            label: entry.label.clone(),
            channels: entry.channels.clone(),
            time_axis,
            series,
            stats,
        })
    }

    /// Smooth each listed channel separately on the trace's time axis
    ///
    /// The frame-time channel itself may be listed.
    pub fn breakdown<S: AsRef<str>>(
        &self,
        trace: &Trace,
        channels: &[S],
    ) -> Result<ChannelBreakdown, ComparisonError> {
        validate_weight(self.config.smoothing_weight)?;

        let time_axis = self.time_axis(trace)?;
        let channels = channels
            .iter()
            .map(|name| -> Result<(String, Vec<f64>), ComparisonError> {
                let name = name.as_ref();
                let records = trace.channel(name)?;
                let smoothed = smooth_series(records, self.config.smoothing_weight)?;
                Ok((name.to_string(), smoothed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChannelBreakdown {
            time_axis,
            channels,
        })
    }

    fn time_axis(&self, trace: &Trace) -> Result<Vec<f64>, ComparisonError> {
        let frame_times = trace.channel(&self.config.frame_time_channel)?;
        Ok(reconstruct_timeline(frame_times))
    }
}
