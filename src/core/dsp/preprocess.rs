//! Signal preprocessing: DC-offset removal and power-of-two padding

use crate::core::error::AnalysisError;

/// Remove the DC offset from a signal window.
///
/// Computes the arithmetic mean of the first `window_length` samples and
/// subtracts it from each of them, returning the centered window. Samples
/// beyond the window are not part of the analysis and are dropped.
///
/// Without this step the zero-frequency bin dominates the spectrum even
/// when the underlying vibration has no DC component.
pub fn remove_offset(samples: &[f64], window_length: usize) -> Result<Vec<f64>, AnalysisError> {
    if window_length == 0 {
        return Err(AnalysisError::invalid_input(
            "averaging window length must be at least 1",
        ));
    }
    if window_length > samples.len() {
        return Err(AnalysisError::invalid_input(format!(
            "averaging window length {} exceeds signal length {}",
            window_length,
            samples.len()
        )));
    }

    let window = &samples[..window_length];
    let mean = window.iter().sum::<f64>() / window_length as f64;

    Ok(window.iter().map(|s| s - mean).collect())
}

/// Pad a signal with trailing zeros up to the next power of two.
///
/// Idempotent: a sequence whose length is already a power of two comes back
/// unchanged. Length 0 and 1 both count as `2^0` and are left alone.
pub fn pad_to_power_of_two(mut samples: Vec<f64>) -> Vec<f64> {
    if samples.is_empty() {
        return samples;
    }
    let target = samples.len().next_power_of_two();
    samples.resize(target, 0.0);
    samples
}
