//! Sliding-window smoothing filters with replicate edge handling.
//!
//! Both filters pad the input with [`replicate_pad`] and then reduce each
//! `filter_size x filter_size` neighborhood of the padded grid, so the output
//! has the same shape as the input and edge pixels see replicated samples
//! instead of zeros.

use crate::image_proc::padding::replicate_pad;
use ndarray::{Array2, ArrayView2};
use thiserror::Error;

/// Errors for invalid filtering inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter size {0} is invalid: must be an odd positive integer")]
    InvalidFilterSize(usize),
    #[error("Input image must have at least one row and one column")]
    EmptyImage,
}

/// Validate the image/parameter pair shared by both filters.
fn check_inputs(image: ArrayView2<u8>, filter_size: usize) -> Result<usize, FilterError> {
    if filter_size == 0 || filter_size % 2 == 0 {
        return Err(FilterError::InvalidFilterSize(filter_size));
    }
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyImage);
    }
    Ok(filter_size / 2)
}

/// Smooth an image with a square mean filter of the given size.
///
/// Each output pixel is the arithmetic mean of the `filter_size x filter_size`
/// neighborhood centered on it in the replicate-padded input. The mean is
/// accumulated in `f64` and truncated back to `u8` (fractional means round
/// toward zero, matching integer-image semantics).
///
/// # Arguments
/// * `image` - Grayscale input in `(height, width)` order
/// * `filter_size` - Odd window edge length, e.g. 3 for a 3x3 window
///
/// # Returns
/// A smoothed grid with the same shape as the input.
///
/// # Errors
/// * `FilterError::InvalidFilterSize` - `filter_size` is zero or even
/// * `FilterError::EmptyImage` - input has no rows or no columns
pub fn mean_filter(image: ArrayView2<u8>, filter_size: usize) -> Result<Array2<u8>, FilterError> {
    let pad = check_inputs(image, filter_size)?;
    let padded = replicate_pad(image, pad);
    let window_count = (filter_size * filter_size) as f64;

    let smoothed = Array2::from_shape_fn(image.dim(), |(y, x)| {
        let window = padded.slice(ndarray::s![y..y + filter_size, x..x + filter_size]);
        let sum: f64 = window.iter().map(|&v| v as f64).sum();
        (sum / window_count) as u8
    });

    Ok(smoothed)
}

/// Smooth an image with a square median filter of the given size.
///
/// Each output pixel is the median of the `filter_size x filter_size`
/// neighborhood centered on it in the replicate-padded input. The window
/// always holds an odd number of samples, so the median is the exact middle
/// element after sorting and no interpolation is needed.
///
/// # Arguments
/// * `image` - Grayscale input in `(height, width)` order
/// * `filter_size` - Odd window edge length
///
/// # Returns
/// A smoothed grid with the same shape as the input.
///
/// # Errors
/// * `FilterError::InvalidFilterSize` - `filter_size` is zero or even
/// * `FilterError::EmptyImage` - input has no rows or no columns
pub fn median_filter(image: ArrayView2<u8>, filter_size: usize) -> Result<Array2<u8>, FilterError> {
    let pad = check_inputs(image, filter_size)?;
    let padded = replicate_pad(image, pad);
    let mut window = Vec::with_capacity(filter_size * filter_size);

    let (height, width) = image.dim();
    let mut smoothed = Array2::<u8>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            window.clear();
            window.extend(
                padded
                    .slice(ndarray::s![y..y + filter_size, x..x + filter_size])
                    .iter()
                    .copied(),
            );
            window.sort_unstable();
            smoothed[[y, x]] = window[window.len() / 2];
        }
    }

    Ok(smoothed)
}
