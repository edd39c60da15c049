//! Radix-2 decimation-in-time Fast Fourier Transform
//!
//! The transform is the classic iterative form: a bit-reversal permutation
//! followed by `log2(N)` in-place butterfly passes. Output is identical to
//! the textbook recursive even/odd formulation (`X[p] = E[p] + W(p)·O[p]`,
//! `X[p + N/2] = E[p] − W(p)·O[p]`) without its recursion depth or
//! per-level allocations.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::core::error::AnalysisError;

/// Compute the DFT of `input` via the radix-2 FFT.
///
/// The input length must be a power of two; anything else fails with a
/// validation error rather than silently truncating. Lengths 0 and 1 are
/// returned unchanged. Output length always equals input length.
pub fn transform(input: &[Complex64]) -> Result<Vec<Complex64>, AnalysisError> {
    let n = input.len();
    if n <= 1 {
        return Ok(input.to_vec());
    }
    if !n.is_power_of_two() {
        return Err(AnalysisError::validation(format!(
            "transform length {} is not a power of two",
            n
        )));
    }

    let mut x = input.to_vec();

    // Bit-reversal permutation puts the even/odd split order in place.
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            x.swap(i, j);
        }
    }

    // Butterfly passes over sub-transforms of doubling length.
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        for chunk in x.chunks_mut(len) {
            for p in 0..half {
                let twiddle = Complex64::from_polar(1.0, -2.0 * PI * p as f64 / len as f64);
                let even = chunk[p];
                let odd = twiddle * chunk[p + half];
                chunk[p] = even + odd;
                chunk[p + half] = even - odd;
            }
        }
        len <<= 1;
    }

    Ok(x)
}

/// Transform a real-valued sample sequence.
///
/// Lifts the samples onto the real axis of the complex plane; the transform
/// itself does no real-input special-casing.
pub fn transform_real(samples: &[f64]) -> Result<Vec<Complex64>, AnalysisError> {
    let buffer: Vec<Complex64> = samples.iter().map(|&s| Complex64::new(s, 0.0)).collect();
    transform(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Direct O(N²) Fourier sum, the correctness reference.
    fn naive_dft(x: &[Complex64]) -> Vec<Complex64> {
        let n = x.len();
        (0..n)
            .map(|k| {
                x.iter()
                    .enumerate()
                    .map(|(j, &v)| {
                        v * Complex64::from_polar(1.0, -2.0 * PI * (k * j) as f64 / n as f64)
                    })
                    .sum()
            })
            .collect()
    }

    fn assert_spectra_close(actual: &[Complex64], expected: &[Complex64], tolerance: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            let err = (a - e).norm();
            assert!(
                err <= tolerance * (1.0 + e.norm()),
                "bin {}: {} vs {} (error {})",
                i,
                a,
                e,
                err
            );
        }
    }

    #[test]
    fn test_matches_naive_dft_for_all_supported_sizes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for k in 0..=10u32 {
            let n = 1usize << k;
            let input: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), 0.0))
                .collect();
            let fast = transform(&input).unwrap();
            let slow = naive_dft(&input);
            assert_spectra_close(&fast, &slow, 1e-9);
        }
    }

    #[test]
    fn test_matches_rustfft() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 512;
        let input: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();

        let ours = transform(&input).unwrap();

        let mut planner = rustfft::FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        let mut reference = input.clone();
        fft.process(&mut reference);

        assert_spectra_close(&ours, &reference, 1e-9);
    }

    #[test]
    fn test_zero_input_stays_zero() {
        for k in [0u32, 1, 4, 8] {
            let n = 1usize << k;
            let spectrum = transform_real(&vec![0.0; n]).unwrap();
            assert_eq!(spectrum.len(), n);
            assert!(spectrum.iter().all(|c| c.norm() == 0.0));
        }
    }

    #[test]
    fn test_impulse_is_flat() {
        let mut input = vec![0.0; 16];
        input[0] = 1.0;
        let spectrum = transform_real(&input).unwrap();
        for c in &spectrum {
            assert!((c.re - 1.0).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_tone_lands_on_its_bin() {
        let n = 64;
        let bin = 5;
        let input: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * bin as f64 * i as f64 / n as f64).sin())
            .collect();
        let spectrum = transform_real(&input).unwrap();
        let magnitudes: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
        let max_bin = magnitudes[..n / 2]
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(max_bin, bin);
    }

    #[test]
    fn test_non_power_of_two_rejected() {
        for n in [3usize, 5, 6, 100, 1000] {
            let err = transform_real(&vec![1.0; n]).unwrap_err();
            assert!(matches!(err, AnalysisError::Validation(_)), "length {}", n);
        }
    }

    #[test]
    fn test_trivial_lengths_pass_through() {
        assert!(transform(&[]).unwrap().is_empty());
        let one = transform(&[Complex64::new(3.5, 0.0)]).unwrap();
        assert_eq!(one, vec![Complex64::new(3.5, 0.0)]);
    }
}
