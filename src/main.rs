//! Frame Trace Studio
//!
//! Runs the comparison described by an analysis config file. The config path
//! is taken from `FRAME_TRACE_CONFIG` (default `frame-trace.toml`) and
//! `FRAME_TRACE_OUTPUT`, when set, replaces the config's report path. Log
//! verbosity follows `RUST_LOG`.

use anyhow::Result;
use env_logger::Env;
use log::info;
use std::env;
use std::path::PathBuf;

use frame_trace_studio::commands::{
    execute_compare, resolve_config_path, resolve_output_path, validate_args, CompareArgs,
};
use frame_trace_studio::utils::config::{CONFIG_PATH_ENV, OUTPUT_PATH_ENV, REPORT_SCHEMA_VERSION};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!(
        "Frame Trace Studio v{} (report schema v{})",
        env!("CARGO_PKG_VERSION"),
        REPORT_SCHEMA_VERSION
    );

    let config_override = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let output_override = env::var_os(OUTPUT_PATH_ENV).map(PathBuf::from);

    let args = CompareArgs {
        config_path: resolve_config_path(config_override.as_deref()),
        output: resolve_output_path(output_override.as_deref()),
    };

    // Validate args first
    validate_args(&args)?;

    execute_compare(args)?;

    Ok(())
}
