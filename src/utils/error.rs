//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a trace or reading its channels
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Malformed trace: {0}")]
    MalformedTrace(String),

    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during series smoothing
#[derive(Error, Debug)]
pub enum SmoothError {
    #[error("Smoothing weight must be within [0, 1], got {0}")]
    InvalidWeight(f64),
}

/// Errors that can occur while building a comparison
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Smooth(#[from] SmoothError),
}

/// Errors that can occur while loading an analysis configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
