//! Frame Trace Studio
//!
//! Frame-time trace analysis for GPU render passes. Loads recorded traces,
//! rebuilds each trace's elapsed-time axis, sums the selected pass channels
//! and smooths them with a debiased EMA so a baseline technique can be
//! overlaid against its optimized variants.
//!
//! ## Getting Started
//!
//! ```ignore
//! use frame_trace_studio::comparison::{ComparisonBuilder, ComparisonConfig, ComparisonEntry};
//! use frame_trace_studio::parser::load_trace;
//! use std::path::Path;
//!
//! let baseline = load_trace(Path::new("Data/BaselineTrace.json"))?;
//! let config = ComparisonConfig::new("/onFrameRender/gpu_time").with_weight(0.9);
//! let pairs = ComparisonBuilder::new(config)
//!     .build(&[ComparisonEntry::new("Baseline", &baseline, ["/VAO/gpu_time"])])?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod comparison;
pub mod output;
pub mod parser;
pub mod utils;
