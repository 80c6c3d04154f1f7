//! Command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, resolve_config_path, resolve_output_path, validate_args};
pub use models::CompareArgs;
pub use utils::validate_report_file;
