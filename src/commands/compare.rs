//! Compare command implementation.
//!
//! The compare command:
//! 1. Loads the analysis config
//! 2. Loads every referenced trace
//! 3. Builds the smoothed comparison series
//! 4. Prints a terminal summary
//! 5. Writes the JSON report

use super::models::CompareArgs;
use crate::comparison::{ComparisonBuilder, ComparisonEntry, ComparisonReport};
use crate::output::{render_terminal_summary, write_report};
use crate::parser::{load_trace, Trace};
use crate::utils::config::{load_config, EntryConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was built (and written, if an output path is set)
///
/// # Errors
/// * Config loading or validation failures
/// * Trace loading errors
/// * Unknown or malformed channels
/// * File write errors
pub fn execute_compare(args: CompareArgs) -> Result<ComparisonReport> {
    let start_time = Instant::now();

    info!("Starting comparison from config: {}", args.config_path.display());

    // Step 1: Load config
    info!("Step 1/4: Loading analysis config...");
    let config = load_config(&args.config_path).with_context(|| {
        format!("Failed to load config {}", args.config_path.display())
    })?;

    // Step 2: Load traces
    info!("Step 2/4: Loading {} traces...", config.entries.len());
    let traces = load_entry_traces(&config.entries)?;

    // Step 3: Build comparison
    info!("Step 3/4: Building comparison series...");
    let mut entries = Vec::with_capacity(config.entries.len());
    for entry in &config.entries {
        let trace = traces
            .get(&entry.trace)
            .with_context(|| format!("Trace {} was not loaded", entry.trace.display()))?;
        entries.push(ComparisonEntry::new(
            entry.label.clone(),
            trace,
            entry.channels.iter().cloned(),
        ));
    }

    let builder = ComparisonBuilder::new(config.comparison_config());
    let series = builder
        .build(&entries)
        .context("Failed to build comparison")?;

    let report = ComparisonReport::new(builder.config(), &series);

    if config.summary {
        println!("{}", render_terminal_summary(&report));
    }

    // Step 4: Write report
    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            info!("Step 4/4: Writing report...");
            write_report(&report, path).context("Failed to write comparison report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => info!("Step 4/4: Skipping report (no output path configured)"),
    }

    let elapsed = start_time.elapsed();
    info!("Comparison completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Load each distinct trace path once
///
/// **Private** - internal helper for execute_compare
fn load_entry_traces(entries: &[EntryConfig]) -> Result<BTreeMap<PathBuf, Trace>> {
    let mut traces = BTreeMap::new();

    for entry in entries {
        if traces.contains_key(&entry.trace) {
            debug!("Reusing trace {} for '{}'", entry.trace.display(), entry.label);
            continue;
        }

        let trace = load_trace(entry.trace.as_path())
            .with_context(|| format!("Failed to load trace {}", entry.trace.display()))?;

        debug!(
            "Loaded {} ({} frames, {} channels)",
            entry.trace.display(),
            trace.frame_count(),
            trace.channel_names().len()
        );

        traces.insert(entry.trace.clone(), trace);
    }

    Ok(traces)
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.config_path.as_os_str().is_empty() {
        anyhow::bail!("Config path cannot be empty");
    }

    if !args.config_path.is_file() {
        anyhow::bail!("Config file not found: {}", args.config_path.display());
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
        if output.is_dir() {
            anyhow::bail!("Output path is a directory: {}", output.display());
        }
    }

    Ok(())
}

/// Resolve the config path from an optional override
///
/// **Public** - used by main.rs with the `FRAME_TRACE_CONFIG` value
pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| CompareArgs::default().config_path)
}

/// Resolve the report output override
///
/// **Public** - used by main.rs with the `FRAME_TRACE_OUTPUT` value
///
/// An unset or empty value means the config's `output` applies.
pub fn resolve_output_path(override_path: Option<&Path>) -> Option<PathBuf> {
    override_path
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
