//! Output writers for comparison reports.
//!
//! This module handles:
//! - JSON reports (written for plotting tools, read back for validation)
//! - Terminal summaries

pub mod json;
pub mod terminal;

// Re-export main functions
pub use json::{read_report, write_report};
pub use terminal::render_terminal_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
