//! Result export: spectrum tables and JSON reports
//!
//! Output paths carry a run timestamp so repeated analyses of the same
//! file never overwrite earlier results.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{AnalysisConfig, SpectrumKind};
use crate::core::{Peak, SpectrumReport};

/// Output file locations for one analyzed signal.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub spectrum_csv: PathBuf,
    pub report_json: PathBuf,
    pub magnitude_png: PathBuf,
    pub power_png: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, stem: &str) -> Self {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let base = format!("{}_{}", stem, timestamp);
        Self {
            spectrum_csv: output_dir.join(format!("{}_spectrum.csv", base)),
            report_json: output_dir.join(format!("{}_report.json", base)),
            magnitude_png: output_dir.join(format!("{}_magnitude.png", base)),
            power_png: output_dir.join(format!("{}_power.png", base)),
        }
    }
}

/// Spreadsheet-style rows: frequency, magnitude, power.
pub fn write_spectrum_csv(report: &SpectrumReport, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "frequency,magnitude,power")?;
    for i in 0..report.frequencies.len() {
        writeln!(
            out,
            "{},{},{}",
            report.frequencies[i], report.magnitudes[i], report.powers[i]
        )?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: String,
    generated_at: String,
    config: &'a AnalysisConfig,
    analyzed_samples: usize,
    fft_size: usize,
    bin_width: f64,
    peak_source: SpectrumKind,
    peaks: &'a [Peak],
}

/// Full machine-readable report: configuration, run metadata, peaks.
pub fn write_report_json(
    source: &Path,
    report: &SpectrumReport,
    config: &AnalysisConfig,
    path: &Path,
) -> Result<()> {
    let payload = JsonReport {
        source: source.display().to_string(),
        generated_at: Local::now().to_rfc3339(),
        config,
        analyzed_samples: report.analyzed_samples,
        fft_size: report.fft_size,
        bin_width: report.bin_width,
        peak_source: report.peak_source,
        peaks: &report.peaks,
    };

    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &payload)
        .with_context(|| format!("writing report to {}", path.display()))?;
    Ok(())
}
