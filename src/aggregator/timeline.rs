//! Elapsed-time axis reconstruction from per-frame durations.

use log::debug;

/// Scale applied once to the accumulated frame durations
pub const TIME_AXIS_SCALE: f64 = 1e-3;

/// Reconstruct the elapsed time at the end of each frame
///
/// **Public** - main entry point for time axis reconstruction
///
/// Accumulates the raw durations first and scales the running sums by
/// [`TIME_AXIS_SCALE`] afterwards. Zero-duration frames are kept, so the
/// axis is non-decreasing rather than strictly increasing.
///
/// # Example
/// ```ignore
/// let axis = reconstruct_timeline(&[1000.0, 1000.0, 1000.0]);
/// assert_eq!(axis, vec![1.0, 2.0, 3.0]);
/// ```
pub fn reconstruct_timeline(frame_times: &[f64]) -> Vec<f64> {
    let mut elapsed = 0.0_f64;
    let mut axis: Vec<f64> = frame_times
        .iter()
        .map(|duration| {
            elapsed += *duration;
            elapsed
        })
        .collect();

    for point in &mut axis {
        *point *= TIME_AXIS_SCALE;
    }

    debug!(
        "Reconstructed time axis: {} frames, {:.3} total",
        axis.len(),
        axis.last().copied().unwrap_or(0.0)
    );

    axis
}
