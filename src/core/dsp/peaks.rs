//! Local-maximum peak detection over a folded amplitude series

use serde::{Deserialize, Serialize};

use crate::core::error::AnalysisError;

/// A spectral peak: frequency and the amplitude found there, both rounded
/// to the detection precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub frequency: f64,
    pub amplitude: f64,
}

/// Find local maxima that rise above the series mean.
///
/// An interior index `i` is a peak iff `amplitudes[i] > mean`, both
/// neighbors are strictly lower, and the value rounded to `precision`
/// decimal digits is non-zero. Inputs shorter than 3 points have no
/// interior index and yield an empty result. The two sequences must be
/// aligned index-for-index; a length mismatch is a bug upstream, not a
/// user error.
pub fn detect_peaks(
    amplitudes: &[f64],
    frequencies: &[f64],
    precision: u32,
) -> Result<Vec<Peak>, AnalysisError> {
    if amplitudes.len() != frequencies.len() {
        return Err(AnalysisError::internal(format!(
            "amplitude series has {} points but frequency axis has {}",
            amplitudes.len(),
            frequencies.len()
        )));
    }
    if amplitudes.len() < 3 {
        return Ok(Vec::new());
    }

    let mean = amplitudes.iter().sum::<f64>() / amplitudes.len() as f64;

    let mut peaks = Vec::new();
    for i in 1..amplitudes.len() - 1 {
        if amplitudes[i] > mean
            && amplitudes[i - 1] < amplitudes[i]
            && amplitudes[i] > amplitudes[i + 1]
        {
            let amplitude = round_to(amplitudes[i], precision);
            if amplitude != 0.0 {
                peaks.push(Peak {
                    frequency: round_to(frequencies[i], precision),
                    amplitude,
                });
            }
        }
    }

    Ok(peaks)
}

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_interior_peak() {
        let amplitudes = [10.0, 20.0, 30.0, 25.0, 20.0, 10.0];
        let frequencies = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let peaks = detect_peaks(&amplitudes, &frequencies, 2).unwrap();
        assert_eq!(
            peaks,
            vec![Peak {
                frequency: 3.0,
                amplitude: 30.0
            }]
        );
    }

    #[test]
    fn test_monotonic_sequences_have_no_peaks() {
        let rising: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let falling: Vec<f64> = (0..10).map(|i| (10 - i) as f64).collect();
        let freqs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert!(detect_peaks(&rising, &freqs, 2).unwrap().is_empty());
        assert!(detect_peaks(&falling, &freqs, 2).unwrap().is_empty());
    }

    #[test]
    fn test_short_input_yields_empty() {
        assert!(detect_peaks(&[], &[], 2).unwrap().is_empty());
        assert!(detect_peaks(&[1.0], &[1.0], 2).unwrap().is_empty());
        assert!(detect_peaks(&[1.0, 2.0], &[1.0, 2.0], 2).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch_is_internal_error() {
        let err = detect_peaks(&[1.0, 2.0, 1.0], &[1.0, 2.0], 2).unwrap_err();
        assert!(matches!(err, AnalysisError::InternalInvariant(_)));
    }

    #[test]
    fn test_rounding_suppresses_tiny_peaks() {
        // 0.004 rounds to 0.00 at two digits, so the local maximum is
        // discarded; at three digits it survives.
        let amplitudes = [0.001, 0.004, 0.001, 0.001, 0.001, 0.001];
        let frequencies = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(detect_peaks(&amplitudes, &frequencies, 2).unwrap().is_empty());
        let peaks = detect_peaks(&amplitudes, &frequencies, 3).unwrap();
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].amplitude, 0.004);
    }

    #[test]
    fn test_peaks_come_back_in_frequency_order() {
        let amplitudes = [0.0, 5.0, 0.0, 8.0, 0.0, 6.0, 0.0, 0.0];
        let frequencies: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
        let peaks = detect_peaks(&amplitudes, &frequencies, 2).unwrap();
        let found: Vec<f64> = peaks.iter().map(|p| p.frequency).collect();
        assert_eq!(found, vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_plateau_is_not_a_peak() {
        // Equal neighbors fail the strict comparisons on both sides.
        let amplitudes = [0.0, 5.0, 5.0, 0.0];
        let frequencies = [0.0, 1.0, 2.0, 3.0];
        assert!(detect_peaks(&amplitudes, &frequencies, 2).unwrap().is_empty());
    }
}
