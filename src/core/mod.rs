//! Core analysis modules

pub mod dsp;
pub mod error;
pub mod pipeline;

pub use dsp::Peak;
pub use error::AnalysisError;
pub use pipeline::{analyze, Signal, SpectrumReport};
