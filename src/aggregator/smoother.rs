//! Debiased exponential moving average.
//!
//! The accumulator starts at zero, so early outputs are divided by
//! `1 - weight^n` to remove the bias toward zero.
//!
//! A weight of `1.0` skips the debias division but still runs the recurrence,
//! which multiplies every input by `1 - weight = 0`. The output is therefore
//! all zeros, not the input passed through. Callers wanting no smoothing
//! should use a weight of `0.0`.

use crate::utils::error::SmoothError;

/// Check that a smoothing weight lies in `[0, 1]`
///
/// NaN is rejected.
pub fn validate_weight(weight: f64) -> Result<(), SmoothError> {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(SmoothError::InvalidWeight(weight))
    }
}

/// Smooth a series with a debiased EMA
///
/// **Public** - main entry point for smoothing
///
/// Causal and single pass; the input is never modified.
///
/// # Errors
/// * `SmoothError::InvalidWeight` - `weight` is outside `[0, 1]`
///
/// # Example
/// ```ignore
/// let smoothed = smooth_series(&[10.0, 10.0, 10.0, 10.0], 0.5)?;
/// assert_eq!(smoothed, vec![10.0; 4]);
/// ```
pub fn smooth_series(series: &[f64], weight: f64) -> Result<Vec<f64>, SmoothError> {
    validate_weight(weight)?;

    let mut last = 0.0;
    let mut accumulated_count = 0.0;
    let mut smoothed = Vec::with_capacity(series.len());

    for value in series {
        last = last * weight + (1.0 - weight) * value;
        accumulated_count += 1.0;

        let debias = if weight == 1.0 {
            1.0
        } else {
            1.0 - weight.powf(accumulated_count)
        };

        smoothed.push(last / debias);
    }

    Ok(smoothed)
}
