//! Naive discrete Fourier transforms.
//!
//! These are direct O(N²) evaluations of the defining DFT sum, used as
//! reference kernels. The forward transform carries the `1/N` normalization:
//!
//! `out[k] = (1/N) * Σ_n signal[n] * exp(-2πi * k * n / N)`
//!
//! Standard FFT libraries leave the forward transform unnormalized, so any
//! comparison against one must account for the scale factor. Do not switch
//! conventions here.

use ndarray::{Array2, ArrayView2, Zip};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Row-pass and full spectra of a separable 2D DFT.
///
/// The row pass is a meaningful intermediate for visualization, not scratch
/// state, so [`dft_2d`] returns both grids.
#[derive(Debug, Clone)]
pub struct SpectrumPair {
    /// 1D DFT applied along each row of the source image.
    pub row_pass: Array2<Complex64>,
    /// 1D DFT applied along each column of `row_pass`.
    pub full: Array2<Complex64>,
}

/// Compute the normalized forward DFT of a complex signal.
///
/// Direct evaluation of the defining sum, O(N²). An empty signal yields an
/// empty spectrum.
///
/// # Arguments
/// * `signal` - Input samples of length `N`
///
/// # Returns
/// `N` complex frequency coefficients with the `1/N` factor applied.
pub fn dft_1d(signal: &[Complex64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let scale = 1.0 / n as f64;
    let step = -2.0 * PI / n as f64;

    (0..n)
        .map(|k| {
            let mut acc = Complex64::new(0.0, 0.0);
            for (idx, &sample) in signal.iter().enumerate() {
                let angle = step * (k as f64) * (idx as f64);
                acc += sample * Complex64::new(angle.cos(), angle.sin());
            }
            acc * scale
        })
        .collect()
}

/// Compute the normalized forward DFT of a real signal.
pub fn dft_1d_real(signal: &[f64]) -> Vec<Complex64> {
    let complex: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    dft_1d(&complex)
}

/// Compute a separable 2D DFT of a real-valued grid.
///
/// Pass 1 transforms each of the `H` rows as an independent length-`W`
/// signal; pass 2 transforms each of the `W` columns of that result as an
/// independent length-`H` signal. Rows (resp. columns) are independent, so
/// each pass runs in parallel across lanes with results written to disjoint
/// output rows/columns.
///
/// # Arguments
/// * `image` - Real-valued grid in `(height, width)` order
///
/// # Returns
/// A [`SpectrumPair`] holding both the row-pass and the full spectrum, each
/// with the shape of the input.
pub fn dft_2d(image: ArrayView2<f64>) -> SpectrumPair {
    let (height, width) = image.dim();

    let mut row_pass = Array2::<Complex64>::zeros((height, width));
    Zip::from(row_pass.rows_mut())
        .and(image.rows())
        .par_for_each(|mut out_row, in_row| {
            let signal: Vec<Complex64> =
                in_row.iter().map(|&v| Complex64::new(v, 0.0)).collect();
            for (out, value) in out_row.iter_mut().zip(dft_1d(&signal)) {
                *out = value;
            }
        });

    let mut full = Array2::<Complex64>::zeros((height, width));
    Zip::from(full.columns_mut())
        .and(row_pass.columns())
        .par_for_each(|mut out_col, in_col| {
            let signal: Vec<Complex64> = in_col.iter().copied().collect();
            for (out, value) in out_col.iter_mut().zip(dft_1d(&signal)) {
                *out = value;
            }
        });

    SpectrumPair { row_pass, full }
}
