//! Configuration and constants for the analysis tooling.
//!
//! Channel names, trace locations and the smoothing weight are caller
//! configuration. They are loaded from a TOML file into [`AnalysisConfig`]
//! and handed to the comparison pipeline explicitly.

use crate::aggregator::smoother::validate_weight;
use crate::comparison::ComparisonConfig;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current comparison report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Top-level and per-channel field names of the trace document
pub const FRAME_COUNT_FIELD: &str = "frame_count";
pub const EVENTS_FIELD: &str = "events";
pub const RECORDS_FIELD: &str = "records";

/// Largest `frame_count` a loaded trace may declare (about 77 hours at 60 fps)
pub const MAX_FRAME_COUNT: usize = 1 << 24;

/// Frame-time channel used when a config file does not name one
pub const DEFAULT_FRAME_TIME_CHANNEL: &str = "/onFrameRender/gpu_time";

/// Config file read by the binary when `FRAME_TRACE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "frame-trace.toml";

/// Environment variable naming the config file for the binary
pub const CONFIG_PATH_ENV: &str = "FRAME_TRACE_CONFIG";

/// Environment variable overriding the config's report output path
pub const OUTPUT_PATH_ENV: &str = "FRAME_TRACE_OUTPUT";

/// Complete analysis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Channel holding the per-frame duration used for the time axis
    #[serde(default = "default_frame_time_channel")]
    pub frame_time_channel: String,

    /// EMA weight shared by every entry (0 disables smoothing)
    #[serde(default)]
    pub smoothing_weight: f64,

    /// Where to write the comparison report (optional)
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Print a terminal summary after building the comparison
    #[serde(default = "default_summary")]
    pub summary: bool,

    /// Traces to compare; the first entry is the baseline
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// One trace plus the channels summed for it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryConfig {
    /// Legend label (e.g. "SVAO (Baseline)")
    pub label: String,

    /// Path to the trace JSON
    pub trace: PathBuf,

    /// Channels summed per frame, in summation order
    #[serde(default)]
    pub channels: Vec<String>,
}

fn default_frame_time_channel() -> String {
    DEFAULT_FRAME_TIME_CHANNEL.to_string()
}

fn default_summary() -> bool {
    true
}

impl AnalysisConfig {
    /// Comparison settings shared by every entry
    pub fn comparison_config(&self) -> ComparisonConfig {
        ComparisonConfig {
            frame_time_channel: self.frame_time_channel.clone(),
            smoothing_weight: self.smoothing_weight,
        }
    }

    /// Check semantic constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_time_channel.is_empty() {
            return Err(ConfigError::Invalid(
                "frame_time_channel cannot be empty".to_string(),
            ));
        }

        validate_weight(self.smoothing_weight)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.entries.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one [[entries]] table is required".to_string(),
            ));
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "entry {} has an empty label",
                    index
                )));
            }
            if entry.trace.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "entry '{}' has an empty trace path",
                    entry.label
                )));
            }
        }

        Ok(())
    }
}

/// Load an analysis configuration from a TOML file
///
/// Relative trace paths are resolved against the directory holding the
/// config file.
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If the configuration is semantically wrong
///
/// # Example
/// ```ignore
/// let config = load_config("frame-trace.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading analysis config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_config(&contents, path.parent())
}

/// Parse an analysis configuration from TOML text
pub fn parse_config(
    contents: &str,
    base_dir: Option<&Path>,
) -> Result<AnalysisConfig, ConfigError> {
    let mut config: AnalysisConfig = toml::from_str(contents)?;

    if let Some(base) = base_dir.filter(|b| !b.as_os_str().is_empty()) {
        for entry in &mut config.entries {
            if entry.trace.is_relative() {
                entry.trace = base.join(&entry.trace);
            }
        }
    }

    config.validate()?;

    debug!(
        "Config has {} entries, weight {}",
        config.entries.len(),
        config.smoothing_weight
    );

    Ok(config)
}
