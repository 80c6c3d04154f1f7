//! Trace loading and channel lookup.
//!
//! Loading only checks the document structure (`frame_count` and `events`).
//! Channel lengths are checked when a channel is accessed, so a trace may carry
//! unrelated instrumentation channels that do not match `frame_count`.

use super::schema::{RawChannel, RawTraceDocument};
use crate::utils::config::{EVENTS_FIELD, FRAME_COUNT_FIELD, MAX_FRAME_COUNT, RECORDS_FIELD};
use crate::utils::error::TraceError;
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Where a trace document comes from
#[derive(Debug, Clone, Copy)]
pub enum TraceSource<'a> {
    /// Path to a JSON file
    Path(&'a Path),
    /// In-memory JSON bytes
    Bytes(&'a [u8]),
}

impl<'a> From<&'a Path> for TraceSource<'a> {
    fn from(path: &'a Path) -> Self {
        TraceSource::Path(path)
    }
}

impl<'a> From<&'a [u8]> for TraceSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        TraceSource::Bytes(bytes)
    }
}

/// Decoded channel slot; decode failures are kept and reported on access
#[derive(Debug, Clone)]
enum ChannelSlot {
    Records(Vec<f64>),
    Invalid(String),
}

/// A loaded trace: frame count plus named per-frame channels
///
/// Read-only once constructed.
#[derive(Debug, Clone)]
pub struct Trace {
    frame_count: usize,
    events: HashMap<String, ChannelSlot>,
}

impl Trace {
    /// Build a trace directly from channel data
    ///
    /// Lengths are not checked here; like a loaded trace, a channel of the
    /// wrong length fails when it is accessed.
    pub fn new<I, S>(frame_count: usize, channels: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let events = channels
            .into_iter()
            .map(|(name, records)| (name.into(), ChannelSlot::Records(records)))
            .collect();

        Self {
            frame_count,
            events,
        }
    }

    /// Number of frames every accessed channel must cover
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Whether `name` exists in the trace
    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// All channel names, sorted
    pub fn channel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.events.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a channel's records
    ///
    /// # Errors
    /// * `TraceError::UnknownChannel` - `name` is not in `events`
    /// * `TraceError::MalformedTrace` - the channel has no usable `records`,
    ///   its length differs from `frame_count`, or it holds a negative value
    pub fn channel(&self, name: &str) -> Result<&[f64], TraceError> {
        let slot = self
            .events
            .get(name)
            .ok_or_else(|| TraceError::UnknownChannel(name.to_string()))?;

        match slot {
            ChannelSlot::Invalid(reason) => Err(TraceError::MalformedTrace(format!(
                "channel '{}': {}",
                name, reason
            ))),
            ChannelSlot::Records(records) if records.len() != self.frame_count => {
                Err(TraceError::MalformedTrace(format!(
                    "channel '{}' has {} records but {} is {}",
                    name,
                    records.len(),
                    FRAME_COUNT_FIELD,
                    self.frame_count
                )))
            }
            ChannelSlot::Records(records) => {
                if let Some((frame, value)) =
                    records.iter().enumerate().find(|(_, value)| **value < 0.0)
                {
                    return Err(TraceError::MalformedTrace(format!(
                        "channel '{}' has negative value {} at frame {}",
                        name, value, frame
                    )));
                }
                Ok(records.as_slice())
            }
        }
    }
}

/// Load a trace from a file or from bytes
///
/// **Public** - main entry point for trace loading
///
/// # Errors
/// * `TraceError::Io` - the file cannot be read
/// * `TraceError::Json` - the document is not valid JSON
/// * `TraceError::MalformedTrace` - `frame_count` missing, negative, not an
///   integer or above `MAX_FRAME_COUNT`, or `events` missing or not an object
///
/// # Example
/// ```ignore
/// let trace = load_trace(Path::new("Data/BaselineTrace.json"))?;
/// let frame_times = trace.channel("/onFrameRender/gpu_time")?;
/// ```
pub fn load_trace<'a>(source: impl Into<TraceSource<'a>>) -> Result<Trace, TraceError> {
    match source.into() {
        TraceSource::Path(path) => {
            debug!("Reading trace from: {}", path.display());
            let bytes = fs::read(path)?;
            parse_trace_bytes(&bytes)
        }
        TraceSource::Bytes(bytes) => parse_trace_bytes(bytes),
    }
}

/// Parse trace JSON bytes
///
/// **Public** - used by load_trace and tests
pub fn parse_trace_bytes(bytes: &[u8]) -> Result<Trace, TraceError> {
    let document: RawTraceDocument = serde_json::from_slice(bytes)?;
    from_document(document)
}

/// Validate the document structure and decode channels
///
/// **Private** - internal helper for parse_trace_bytes
fn from_document(document: RawTraceDocument) -> Result<Trace, TraceError> {
    let frame_count = extract_frame_count(document.frame_count.as_ref())?;

    let raw_events = match document.events {
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(TraceError::MalformedTrace(format!(
                "'{}' must be an object, found {}",
                EVENTS_FIELD,
                json_type_name(&other)
            )))
        }
        None => {
            return Err(TraceError::MalformedTrace(format!(
                "missing '{}' field",
                EVENTS_FIELD
            )))
        }
    };

    let mut events = HashMap::with_capacity(raw_events.len());
    for (name, value) in raw_events {
        let slot = decode_channel(value);
        if let ChannelSlot::Invalid(reason) = &slot {
            warn!("Channel '{}' cannot be decoded: {}", name, reason);
        }
        events.insert(name, slot);
    }

    debug!(
        "Loaded trace: {} frames, {} channels",
        frame_count,
        events.len()
    );

    Ok(Trace {
        frame_count,
        events,
    })
}

/// Parse `frame_count` as a non-negative integer no larger than `MAX_FRAME_COUNT`
///
/// **Private** - internal helper for from_document
fn extract_frame_count(value: Option<&Value>) -> Result<usize, TraceError> {
    let value = value.ok_or_else(|| {
        TraceError::MalformedTrace(format!("missing '{}' field", FRAME_COUNT_FIELD))
    })?;

    let number = match value {
        Value::Number(number) => number,
        other => {
            return Err(TraceError::MalformedTrace(format!(
                "'{}' must be a number, found {}",
                FRAME_COUNT_FIELD,
                json_type_name(other)
            )))
        }
    };

    if let Some(count) = number.as_u64() {
        return usize::try_from(count)
            .ok()
            .filter(|count| *count <= MAX_FRAME_COUNT)
            .ok_or_else(|| {
                TraceError::MalformedTrace(format!(
                    "'{}' {} exceeds the limit of {}",
                    FRAME_COUNT_FIELD, count, MAX_FRAME_COUNT
                ))
            });
    }

    let reason = if number.as_i64().is_some() {
        "is negative"
    } else {
        "is not an integer"
    };

    Err(TraceError::MalformedTrace(format!(
        "'{}' {} ({})",
        FRAME_COUNT_FIELD, reason, number
    )))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode one channel object without failing the whole trace
///
/// **Private** - internal helper for from_document
fn decode_channel(value: serde_json::Value) -> ChannelSlot {
    match serde_json::from_value::<RawChannel>(value) {
        Ok(RawChannel {
            records: Some(records),
        }) => ChannelSlot::Records(records),
        Ok(RawChannel { records: None }) => {
            ChannelSlot::Invalid(format!("missing '{}' field", RECORDS_FIELD))
        }
        Err(e) => ChannelSlot::Invalid(e.to_string()),
    }
}
