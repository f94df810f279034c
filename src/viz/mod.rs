//! Rendering helpers for human inspection of grids and spectra.
//!
//! Everything here is display glue: shifting and log-compressing spectra,
//! rescaling real grids to 8-bit gray, and composing before/after panels.

use crate::image_proc::image::array2_to_gray_image;
use image::GrayImage;
use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;
use std::path::Path;
use thiserror::Error;

/// Magnitude floor applied before taking logs so zero-valued frequency bins
/// render as the darkest pixel instead of producing -inf.
const MAGNITUDE_FLOOR: f64 = 1e-12;

/// Errors for visualization operations.
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Cannot render an empty grid")]
    EmptyGrid,
    #[error("Panels must share the same dimensions: first is {first:?}, panel {index} is {other:?}")]
    PanelSizeMismatch {
        first: (u32, u32),
        index: usize,
        other: (u32, u32),
    },
    #[error("Failed to write image: {0}")]
    Save(#[from] image::ImageError),
}

/// Standard Result type for visualization operations.
pub type Result<T> = std::result::Result<T, VizError>;

/// Move the zero-frequency bin of a spectrum to the grid center.
///
/// Element `k` along an axis of length `n` moves to `(k + n/2) mod n`,
/// matching the usual fft-shift convention for even and odd lengths.
pub fn fft_shift(spectrum: ArrayView2<Complex64>) -> Array2<Complex64> {
    let (height, width) = spectrum.dim();
    let mut shifted = Array2::<Complex64>::zeros((height, width));
    for ((i, j), &value) in spectrum.indexed_iter() {
        shifted[[(i + height / 2) % height, (j + width / 2) % width]] = value;
    }
    shifted
}

/// Natural log of the magnitude of each spectrum sample.
///
/// Magnitudes are floored at a tiny positive value so empty bins map to a
/// large negative number rather than -inf, which keeps the subsequent
/// normalization finite.
pub fn log_magnitude(spectrum: ArrayView2<Complex64>) -> Array2<f64> {
    spectrum.map(|c| c.norm().max(MAGNITUDE_FLOOR).ln())
}

/// Rescale a finite real grid to the full 8-bit range for display.
///
/// A constant grid maps to mid-gray.
///
/// # Errors
/// * `VizError::EmptyGrid` - the grid has no samples
pub fn normalize_to_gray(grid: ArrayView2<f64>) -> Result<GrayImage> {
    let (height, width) = grid.dim();
    if height == 0 || width == 0 {
        return Err(VizError::EmptyGrid);
    }

    let min_val = grid.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max_val = grid.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let bytes = if (max_val - min_val).abs() < 1e-12 {
        Array2::from_elem((height, width), 128u8)
    } else {
        let scale = 255.0 / (max_val - min_val);
        grid.map(|&v| ((v - min_val) * scale).round() as u8)
    };

    Ok(array2_to_gray_image(&bytes))
}

/// Render the log-magnitude of a shifted spectrum as a grayscale image.
pub fn spectrum_to_gray_image(spectrum: ArrayView2<Complex64>) -> Result<GrayImage> {
    let shifted = fft_shift(spectrum);
    let log_mag = log_magnitude(shifted.view());
    normalize_to_gray(log_mag.view())
}

/// Compose equally-sized gray panels left to right with a separator column.
///
/// # Errors
/// * `VizError::EmptyGrid` - no panels supplied
/// * `VizError::PanelSizeMismatch` - panels differ in dimensions
pub fn side_by_side(panels: &[&GrayImage]) -> Result<GrayImage> {
    let first = panels.first().ok_or(VizError::EmptyGrid)?;
    let (panel_w, panel_h) = first.dimensions();

    for (index, panel) in panels.iter().enumerate() {
        if panel.dimensions() != (panel_w, panel_h) {
            return Err(VizError::PanelSizeMismatch {
                first: (panel_w, panel_h),
                index,
                other: panel.dimensions(),
            });
        }
    }

    let separator = 2u32;
    let total_w = panel_w * panels.len() as u32 + separator * (panels.len() as u32 - 1);
    let mut combined = GrayImage::from_pixel(total_w, panel_h, image::Luma([255]));

    for (index, panel) in panels.iter().enumerate() {
        let x_offset = index as u32 * (panel_w + separator);
        for y in 0..panel_h {
            for x in 0..panel_w {
                combined.put_pixel(x_offset + x, y, *panel.get_pixel(x, y));
            }
        }
    }

    Ok(combined)
}

/// Write a grayscale image to disk (format chosen from the extension).
pub fn save_gray<P: AsRef<Path>>(image: &GrayImage, path: P) -> Result<()> {
    image.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fft_shift_even_length() {
        let mut spectrum = Array2::<Complex64>::zeros((4, 4));
        spectrum[[0, 0]] = Complex64::new(1.0, 0.0); // DC bin
        let shifted = fft_shift(spectrum.view());
        assert_eq!(shifted[[2, 2]], Complex64::new(1.0, 0.0));
        assert_eq!(shifted[[0, 0]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_fft_shift_odd_length() {
        let mut spectrum = Array2::<Complex64>::zeros((3, 5));
        spectrum[[0, 0]] = Complex64::new(1.0, 0.0);
        let shifted = fft_shift(spectrum.view());
        // n//2 shift: row 0 -> 1, column 0 -> 2.
        assert_eq!(shifted[[1, 2]], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_log_magnitude_floors_zero_bins() {
        let spectrum = Array2::<Complex64>::zeros((2, 2));
        let log_mag = log_magnitude(spectrum.view());
        for &v in log_mag.iter() {
            assert!(v.is_finite());
            assert_abs_diff_eq!(v, MAGNITUDE_FLOOR.ln(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalize_spans_full_range() {
        let grid = Array2::from_shape_fn((2, 2), |(i, j)| (i * 2 + j) as f64);
        let img = normalize_to_gray(grid.view()).unwrap();
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(1, 1)[0], 255);
    }

    #[test]
    fn test_normalize_constant_grid_is_mid_gray() {
        let grid = Array2::from_elem((3, 3), 4.2);
        let img = normalize_to_gray(grid.view()).unwrap();
        assert!(img.pixels().all(|p| p[0] == 128));
    }

    #[test]
    fn test_normalize_rejects_empty_grid() {
        let grid = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            normalize_to_gray(grid.view()),
            Err(VizError::EmptyGrid)
        ));
    }

    #[test]
    fn test_side_by_side_dimensions() {
        let a = GrayImage::from_pixel(4, 3, image::Luma([10]));
        let b = GrayImage::from_pixel(4, 3, image::Luma([200]));
        let combined = side_by_side(&[&a, &b]).unwrap();
        assert_eq!(combined.dimensions(), (10, 3));
        assert_eq!(combined.get_pixel(0, 0)[0], 10);
        assert_eq!(combined.get_pixel(6, 0)[0], 200);
        // Separator column stays white.
        assert_eq!(combined.get_pixel(4, 0)[0], 255);
    }

    #[test]
    fn test_side_by_side_rejects_mismatched_panels() {
        let a = GrayImage::new(4, 3);
        let b = GrayImage::new(5, 3);
        assert!(matches!(
            side_by_side(&[&a, &b]),
            Err(VizError::PanelSizeMismatch { index: 1, .. })
        ));
    }
}
