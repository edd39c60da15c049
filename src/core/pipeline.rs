//! The analysis pipeline: preprocess, transform, post-process, detect
//!
//! One parameterized path replaces the near-duplicate per-dataset scripts
//! of the original workflow. Every stage owns and returns a new sequence;
//! the whole run is deterministic for a given signal and configuration.

use serde::Serialize;

use crate::config::{AnalysisConfig, SpectrumKind};
use crate::core::dsp::{
    detect_peaks, fold, frequency_axis, pad_to_power_of_two, remove_offset, to_magnitude,
    to_power, transform_real, Peak,
};
use crate::core::error::AnalysisError;

/// A single-channel sample sequence with its sampling frequency.
#[derive(Debug, Clone)]
pub struct Signal {
    samples: Vec<f64>,
    sampling_frequency: f64,
}

impl Signal {
    /// Build a signal, validating the loader contract: at least one
    /// sample and a positive sampling frequency.
    pub fn new(samples: Vec<f64>, sampling_frequency: f64) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::invalid_input("signal has no samples"));
        }
        if !(sampling_frequency > 0.0) {
            return Err(AnalysisError::invalid_input(format!(
                "sampling frequency must be positive, got {}",
                sampling_frequency
            )));
        }
        Ok(Self {
            samples,
            sampling_frequency,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct SpectrumReport {
    /// Frequency axis, `fft_size / 2` bins spaced `bin_width` apart.
    pub frequencies: Vec<f64>,
    /// Folded normalized magnitude series, aligned with `frequencies`.
    pub magnitudes: Vec<f64>,
    /// Folded power series, aligned with `frequencies`.
    pub powers: Vec<f64>,
    /// Peaks found in the series selected by the configuration.
    pub peaks: Vec<Peak>,
    /// Series the peaks were detected on.
    pub peak_source: SpectrumKind,
    /// Number of samples actually analyzed, after truncation.
    pub analyzed_samples: usize,
    /// Transform length after padding.
    pub fft_size: usize,
    /// Frequency resolution `Fs / N`.
    pub bin_width: f64,
}

/// Run the full pipeline for one signal.
pub fn analyze(signal: &Signal, config: &AnalysisConfig) -> Result<SpectrumReport, AnalysisError> {
    if !(config.sampling_frequency > 0.0) {
        return Err(AnalysisError::invalid_input(format!(
            "sampling frequency must be positive, got {}",
            config.sampling_frequency
        )));
    }

    if config.sample_count == Some(0) {
        return Err(AnalysisError::invalid_input(
            "sample count must be at least 1",
        ));
    }
    let available = signal.len();
    let take = config.sample_count.unwrap_or(available).min(available);
    let samples = &signal.samples()[..take];

    let window = config.window_length.unwrap_or(samples.len());
    let centered = remove_offset(samples, window)?;

    let padded = if config.zero_padding {
        pad_to_power_of_two(centered)
    } else {
        centered
    };

    let spectrum = transform_real(&padded)?;
    let n = spectrum.len();

    let magnitudes = fold(&to_magnitude(&spectrum));
    let powers = fold(&to_power(&spectrum));
    let frequencies = frequency_axis(n, config.sampling_frequency);

    if frequencies.len() != magnitudes.len() || frequencies.len() != powers.len() {
        return Err(AnalysisError::internal(format!(
            "folded series disagree on length: {} frequencies, {} magnitudes, {} powers",
            frequencies.len(),
            magnitudes.len(),
            powers.len()
        )));
    }

    let series = match config.spectrum_kind {
        SpectrumKind::Magnitude => &magnitudes,
        SpectrumKind::Power => &powers,
    };
    let peaks = detect_peaks(series, &frequencies, config.peak_precision)?;

    Ok(SpectrumReport {
        frequencies,
        magnitudes,
        powers,
        peaks,
        peak_source: config.spectrum_kind,
        analyzed_samples: take,
        fft_size: n,
        bin_width: config.sampling_frequency / n as f64,
    })
}
