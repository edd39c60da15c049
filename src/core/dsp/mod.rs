//! Digital signal processing primitives
//!
//! The numerical stages of the pipeline, each a pure function of its
//! inputs: preprocessing (offset removal, padding), the radix-2 transform,
//! spectrum normalization/folding, and peak detection.

pub mod fft;
pub mod peaks;
pub mod preprocess;
pub mod spectrum;

pub use fft::{transform, transform_real};
pub use peaks::{detect_peaks, Peak};
pub use preprocess::{pad_to_power_of_two, remove_offset};
pub use spectrum::{fold, frequency_axis, to_magnitude, to_power};
