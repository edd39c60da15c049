//! Spectrum normalization, folding, and frequency-axis construction

use num_complex::Complex64;

/// Normalized magnitude spectrum: `|X[i]| / N`.
pub fn to_magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    let n = spectrum.len() as f64;
    spectrum.iter().map(|c| c.norm() / n).collect()
}

/// Normalized power spectrum: `(|X[i]| / N)^2`.
pub fn to_power(spectrum: &[Complex64]) -> Vec<f64> {
    let n = spectrum.len() as f64;
    spectrum
        .iter()
        .map(|c| {
            let magnitude = c.norm() / n;
            magnitude * magnitude
        })
        .collect()
}

/// Keep the first `N/2` elements of a series.
///
/// The transform of a real-valued signal is conjugate-symmetric
/// (`X[i] ≈ conj(X[N-i])`), so the upper half carries no new information.
pub fn fold(series: &[f64]) -> Vec<f64> {
    series[..series.len() / 2].to_vec()
}

/// Frequency values for the folded spectrum: `freq[i] = i / (N / Fs)`.
///
/// `n` is the unfolded transform length; the axis covers `[0, Fs/2)` in
/// `N/2` bins spaced `Fs/N` apart.
pub fn frequency_axis(n: usize, sampling_frequency: f64) -> Vec<f64> {
    let total_time = n as f64 / sampling_frequency;
    (0..n / 2).map(|i| i as f64 / total_time).collect()
}
