//! Analysis configuration
//!
//! The original workflow hardcoded sample counts, sampling frequencies, and
//! peak-detection variants per script; here they are one explicit value
//! object handed to the pipeline entry point.

use serde::{Deserialize, Serialize};

/// Which folded series the peak detector scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrumKind {
    Magnitude,
    Power,
}

impl SpectrumKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "magnitude" | "mag" => Some(Self::Magnitude),
            "power" | "pow" => Some(Self::Power),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Magnitude => "magnitude",
            Self::Power => "power",
        }
    }
}

/// Parameters for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of samples taken from the front of the loaded signal.
    /// `None` uses everything; a count beyond the available data is
    /// clamped and the effective value appears in the report.
    pub sample_count: Option<usize>,
    /// Sampling frequency in samples per unit time. Must be positive.
    pub sampling_frequency: f64,
    /// Averaging window for DC-offset removal. `None` spans the whole
    /// (truncated) signal, which is the reference behavior.
    pub window_length: Option<usize>,
    /// Append zeros up to the next power of two before the transform.
    /// Disabled, the signal length must already be a power of two.
    pub zero_padding: bool,
    /// Series the peak detector runs on.
    pub spectrum_kind: SpectrumKind,
    /// Decimal digits peaks are rounded to before the zero check and in
    /// the reported values.
    pub peak_precision: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_count: None,
            sampling_frequency: 1.0,
            window_length: None,
            zero_padding: true,
            spectrum_kind: SpectrumKind::Power,
            peak_precision: 2,
        }
    }
}

impl AnalysisConfig {
    pub fn new(sampling_frequency: f64) -> Self {
        Self {
            sampling_frequency,
            ..Self::default()
        }
    }

    pub fn sample_count(mut self, count: usize) -> Self {
        self.sample_count = Some(count);
        self
    }

    pub fn window_length(mut self, length: usize) -> Self {
        self.window_length = Some(length);
        self
    }

    pub fn zero_padding(mut self, enabled: bool) -> Self {
        self.zero_padding = enabled;
        self
    }

    pub fn spectrum_kind(mut self, kind: SpectrumKind) -> Self {
        self.spectrum_kind = kind;
        self
    }

    pub fn peak_precision(mut self, digits: u32) -> Self {
        self.peak_precision = digits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_scripts() {
        let config = AnalysisConfig::default();
        assert_eq!(config.sampling_frequency, 1.0);
        assert!(config.zero_padding);
        assert_eq!(config.spectrum_kind, SpectrumKind::Power);
        assert_eq!(config.peak_precision, 2);
    }

    #[test]
    fn test_spectrum_kind_from_name() {
        assert_eq!(SpectrumKind::from_name("power"), Some(SpectrumKind::Power));
        assert_eq!(SpectrumKind::from_name("MAG"), Some(SpectrumKind::Magnitude));
        assert_eq!(SpectrumKind::from_name("db"), None);
    }

    #[test]
    fn test_builder_chain() {
        let config = AnalysisConfig::new(1024.0)
            .sample_count(1024)
            .window_length(1024)
            .spectrum_kind(SpectrumKind::Magnitude)
            .peak_precision(3);
        assert_eq!(config.sampling_frequency, 1024.0);
        assert_eq!(config.sample_count, Some(1024));
        assert_eq!(config.peak_precision, 3);
    }
}
