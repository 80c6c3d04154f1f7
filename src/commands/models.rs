use crate::utils::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from the environment
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Path to the analysis config TOML
    pub config_path: PathBuf,

    /// Report output path, overriding the config's `output`
    pub output: Option<PathBuf>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output: None,
        }
    }
}
