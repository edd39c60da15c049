//! VibroSpec - Offline vibration spectrum analysis
//!
//! Converts fixed-length sample sequences from vibration sensors into
//! frequency-domain spectra and extracts the dominant spectral peaks.
//!
//! ## Pipeline
//!
//! 1. **Preprocess** - remove the DC offset over an averaging window, pad
//!    the signal with zeros to the next power of two
//! 2. **Transform** - radix-2 decimation-in-time FFT
//! 3. **Post-process** - normalize to magnitude/power, fold to the
//!    non-redundant half, build the frequency axis
//! 4. **Detect** - local maxima above the spectrum mean
//!
//! ## Module Structure
//!
//! - `core` - the numerical pipeline and its error types
//! - `config` - the analysis configuration value object
//! - `loader` - delimited sample-file reading
//! - `export` - spectrum CSV and JSON report writing
//! - `render` - line-chart PNG rendering
//! - `testgen` - deterministic synthetic signal generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vibrospec::{analyze, AnalysisConfig, Signal, SpectrumKind};
//!
//! let samples = vibrospec::loader::load_samples(path, 0)?;
//! let signal = Signal::new(samples, 1024.0)?;
//!
//! let config = AnalysisConfig::new(1024.0)
//!     .spectrum_kind(SpectrumKind::Power)
//!     .peak_precision(2);
//!
//! let report = analyze(&signal, &config)?;
//! for peak in &report.peaks {
//!     println!("{} Hz -> {}", peak.frequency, peak.amplitude);
//! }
//! ```

// The numerical pipeline
pub mod core;

// Analysis configuration
pub mod config;

// Sample-file loading
pub mod loader;

// Result export
pub mod export;

// Chart rendering
pub mod render;

// Synthetic signal generation
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use config::{AnalysisConfig, SpectrumKind};
pub use core::{analyze, AnalysisError, Peak, Signal, SpectrumReport};
