use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a comparison report JSON file
pub fn validate_report_file(file_path: impl AsRef<Path>) -> Result<()> {
    let file_path = file_path.as_ref();
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path).context("Failed to read comparison report")?;

    if report.version != REPORT_SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            REPORT_SCHEMA_VERSION
        );
    }

    for series in &report.series {
        if series.time_axis.len() != series.values.len() {
            anyhow::bail!(
                "Series '{}' has {} time points but {} values",
                series.label,
                series.time_axis.len(),
                series.values.len()
            );
        }
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Frame time channel: {}", report.frame_time_channel);
    println!("  Smoothing weight: {}", report.smoothing_weight);
    println!("  Series: {}", report.series.len());

    Ok(())
}
