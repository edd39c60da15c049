// src/main.rs
use anyhow::{bail, Context, Result};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use vibrospec::config::{AnalysisConfig, SpectrumKind};
use vibrospec::core::{analyze, Signal, SpectrumReport};
use vibrospec::export::{self, OutputPaths};
use vibrospec::loader;
use vibrospec::render::{self, ChartConfig};

#[derive(Parser, Debug)]
#[command(name = "vibrospec")]
#[command(about = "FFT spectrum and peak extraction for vibration sample files")]
struct Args {
    /// Input sample file or directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for exported results
    #[arg(short, long, default_value = "vibrospec-out")]
    output: PathBuf,

    /// Sampling frequency of the input signals (samples per unit time)
    #[arg(short = 'f', long, default_value = "1.0")]
    sampling_frequency: f64,

    /// Limit analysis to the first N samples of each file
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Averaging window for DC-offset removal (defaults to all samples)
    #[arg(short, long)]
    window: Option<usize>,

    /// Zero-based column holding the sample values
    #[arg(short, long, default_value = "0")]
    column: usize,

    /// Skip zero-padding; signal lengths must already be powers of two
    #[arg(long)]
    no_padding: bool,

    /// Series to detect peaks on: magnitude or power
    #[arg(short = 's', long, default_value = "power")]
    spectrum: String,

    /// Decimal digits peaks are rounded to
    #[arg(short, long, default_value = "2")]
    precision: u32,

    /// Render line charts of the folded spectra
    #[arg(long)]
    charts: bool,

    /// Write the full report as JSON next to the spectrum CSV
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

struct ProcessedFile {
    report: SpectrumReport,
    total_samples: usize,
    paths: OutputPaths,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let spectrum_kind = SpectrumKind::from_name(&args.spectrum)
        .ok_or_else(|| anyhow::anyhow!("unknown spectrum series: {}", args.spectrum))?;
    if args.sampling_frequency <= 0.0 {
        bail!("sampling frequency must be positive");
    }

    let mut config = AnalysisConfig::new(args.sampling_frequency)
        .zero_padding(!args.no_padding)
        .spectrum_kind(spectrum_kind)
        .peak_precision(args.precision);
    config.sample_count = args.samples;
    config.window_length = args.window;

    let files = collect_sample_files(&args.input)?;
    if files.is_empty() {
        println!("{}", "No sample files found!".red());
        return Ok(());
    }
    debug!("collected {} sample file(s) under {}", files.len(), args.input.display());

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    println!("Found {} sample file(s)\n", files.len());

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let outcomes: Vec<(PathBuf, Result<ProcessedFile>)> = files
        .par_iter()
        .progress_with(bar)
        .map(|path| (path.clone(), process_file(path, &config, &args)))
        .collect();

    let mut failures = 0usize;
    for (path, outcome) in &outcomes {
        match outcome {
            Ok(processed) => print_report(path, processed, &args),
            Err(err) => {
                failures += 1;
                println!("Analyzing: {}", path.display().to_string().cyan());
                println!("  Status: {}", "✗ FAILED".red());
                println!("    {:#}", err);
                println!();
            }
        }
    }

    let analyzed = outcomes.len() - failures;
    if failures == 0 {
        println!("{}", format!("Analyzed {} file(s)", analyzed).green());
    } else {
        println!(
            "{}",
            format!("Analyzed {} file(s), {} failed", analyzed, failures).yellow()
        );
    }

    Ok(())
}

fn collect_sample_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if let Some(ext) = entry_path.extension() {
                let ext = ext.to_str().unwrap_or("").to_lowercase();
                if loader::SAMPLE_EXTENSIONS.contains(&ext.as_str()) {
                    files.push(entry_path.to_path_buf());
                }
            }
        }
        files.sort();
    } else {
        bail!("input path {} does not exist", path.display());
    }

    Ok(files)
}

fn process_file(path: &Path, config: &AnalysisConfig, args: &Args) -> Result<ProcessedFile> {
    let samples = loader::load_samples(path, args.column)?;
    let total_samples = samples.len();

    let signal = Signal::new(samples, config.sampling_frequency)?;
    let report = analyze(&signal, config)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("signal");
    let paths = OutputPaths::new(&args.output, stem);

    export::write_spectrum_csv(&report, &paths.spectrum_csv)?;
    if args.json {
        export::write_report_json(path, &report, config, &paths.report_json)?;
    }
    if args.charts {
        let chart = ChartConfig::default();
        render::render_line_chart(
            &report.frequencies,
            &report.magnitudes,
            &chart,
            &paths.magnitude_png,
        )?;
        render::render_line_chart(&report.frequencies, &report.powers, &chart, &paths.power_png)?;
    }

    Ok(ProcessedFile {
        report,
        total_samples,
        paths,
    })
}

fn print_report(path: &Path, processed: &ProcessedFile, args: &Args) {
    let report = &processed.report;

    println!("Analyzing: {}", path.display().to_string().cyan());
    println!(
        "  Samples: {} of {} @ {} Hz",
        report.analyzed_samples,
        processed.total_samples,
        args.sampling_frequency
    );
    println!(
        "  FFT size: {} (bin width {:.4} Hz)",
        report.fft_size, report.bin_width
    );

    if report.peaks.is_empty() {
        println!(
            "  Peaks ({}): {}",
            report.peak_source.name(),
            "none above the spectrum mean".yellow()
        );
    } else {
        println!(
            "  Peaks ({}): {}",
            report.peak_source.name(),
            format!("{} found", report.peaks.len()).green()
        );
        for peak in &report.peaks {
            println!(
                "    • {} Hz  amplitude {}",
                format!("{:.prec$}", peak.frequency, prec = args.precision as usize).yellow(),
                peak.amplitude
            );
        }
    }

    println!(
        "  Spectrum saved to: {}",
        processed.paths.spectrum_csv.display()
    );
    if args.json {
        println!("  Report saved to: {}", processed.paths.report_json.display());
    }
    if args.charts {
        println!(
            "  Charts saved to: {}, {}",
            processed.paths.magnitude_png.display(),
            processed.paths.power_png.display()
        );
    }

    if args.verbose {
        let total_power: f64 = report.powers.iter().sum();
        println!("\n  Technical Details:");
        println!("    Mean band power: {:.6e}", total_power / report.powers.len().max(1) as f64);
        println!(
            "    Nyquist frequency: {:.4} Hz",
            args.sampling_frequency / 2.0
        );
    }

    println!();
}
