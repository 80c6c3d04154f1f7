//! Per-frame summation of named trace channels.

use crate::parser::Trace;
use crate::utils::error::TraceError;
use log::debug;

/// Sum the given channels frame by frame
///
/// **Public** - main entry point for channel aggregation
///
/// # Arguments
/// * `trace` - Loaded trace
/// * `channel_names` - Channels to add, summed left to right in this order
///
/// # Returns
/// One value per frame. With no channel names the result is all zeros, so
/// the output is sized by `frame_count` alone. Loaded traces cap it at
/// `MAX_FRAME_COUNT`; a trace built with `Trace::new` is taken as given.
///
/// # Errors
/// * `TraceError::UnknownChannel` - a listed channel does not exist
/// * `TraceError::MalformedTrace` - a listed channel has the wrong length
///
/// Every channel is resolved before any summing starts, so a failure never
/// leaves a partially aggregated series behind.
pub fn sum_channels<S: AsRef<str>>(
    trace: &Trace,
    channel_names: &[S],
) -> Result<Vec<f64>, TraceError> {
    let channels = channel_names
        .iter()
        .map(|name| trace.channel(name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = vec![0.0; trace.frame_count()];
    for records in &channels {
        for (total, value) in result.iter_mut().zip(records.iter()) {
            *total += value;
        }
    }

    debug!(
        "Summed {} channels over {} frames",
        channels.len(),
        result.len()
    );

    Ok(result)
}
