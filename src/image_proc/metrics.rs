//! Image quality metrics.

use ndarray::ArrayView2;
use thiserror::Error;

/// Errors for invalid metric inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Shape mismatch: ground truth is {expected:?} but processed image is {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("Input images must have at least one row and one column")]
    EmptyImage,
    #[error("Ground-truth image is all zeros; PSNR peak is undefined")]
    ZeroPeak,
}

/// Compute the Peak Signal-to-Noise Ratio between a ground-truth image and a
/// processed image.
///
/// `PSNR = 20*log10(max(G)) - 10*log10(mean((G - S)^2))`, evaluated in `f64`.
/// The peak is the maximum of the actual ground-truth grid rather than the
/// nominal 8-bit ceiling of 255, so images that never reach full scale are
/// scored against their own peak.
///
/// # Arguments
/// * `ground_truth` - Reference image `G`
/// * `processed` - Smoothed/degraded image `S`, same shape as `G`
///
/// # Returns
/// The PSNR in decibels. Identical inputs have zero MSE and return
/// `f64::INFINITY`.
///
/// # Errors
/// * `MetricsError::ShapeMismatch` - the two grids differ in shape
/// * `MetricsError::EmptyImage` - the grids have no samples
/// * `MetricsError::ZeroPeak` - the ground truth is all zeros, so the peak
///   term `log10(0)` is undefined
pub fn psnr(ground_truth: ArrayView2<u8>, processed: ArrayView2<u8>) -> Result<f64, MetricsError> {
    if ground_truth.dim() != processed.dim() {
        return Err(MetricsError::ShapeMismatch {
            expected: ground_truth.dim(),
            actual: processed.dim(),
        });
    }
    let (height, width) = ground_truth.dim();
    if height == 0 || width == 0 {
        return Err(MetricsError::EmptyImage);
    }

    let mut sum_sq = 0.0f64;
    let mut max_val = 0u8;
    for (&g, &s) in ground_truth.iter().zip(processed.iter()) {
        let diff = g as f64 - s as f64;
        sum_sq += diff * diff;
        max_val = max_val.max(g);
    }

    if max_val == 0 {
        return Err(MetricsError::ZeroPeak);
    }

    let mse = sum_sq / (height * width) as f64;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(20.0 * (max_val as f64).log10() - 10.0 * mse.log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_identical_images_give_infinity() {
        let image = Array2::from_shape_fn((4, 4), |(i, j)| (i * 4 + j + 1) as u8);
        let score = psnr(image.view(), image.view()).unwrap();
        assert!(score.is_infinite() && score.is_sign_positive());
    }

    #[test]
    fn test_known_value() {
        // G = [[10]], S = [[8]]: MSE = 4, peak = 10,
        // PSNR = 20*log10(10) - 10*log10(4) = 20 - 6.0206.
        let gt = Array2::from_elem((1, 1), 10u8);
        let processed = Array2::from_elem((1, 1), 8u8);
        let score = psnr(gt.view(), processed.view()).unwrap();
        assert_relative_eq!(score, 20.0 - 10.0 * 4.0f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_peak_is_grid_maximum_not_255() {
        // Same MSE, different grid peaks: the score must track max(G).
        let gt_low = Array2::from_elem((2, 2), 50u8);
        let gt_high = Array2::from_elem((2, 2), 200u8);
        let proc_low = Array2::from_elem((2, 2), 48u8);
        let proc_high = Array2::from_elem((2, 2), 198u8);

        let low = psnr(gt_low.view(), proc_low.view()).unwrap();
        let high = psnr(gt_high.view(), proc_high.view()).unwrap();
        assert_relative_eq!(high - low, 20.0 * (200.0f64 / 50.0).log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let gt = Array2::<u8>::zeros((2, 3));
        let processed = Array2::<u8>::zeros((3, 2));
        assert_eq!(
            psnr(gt.view(), processed.view()),
            Err(MetricsError::ShapeMismatch {
                expected: (2, 3),
                actual: (3, 2),
            })
        );
    }

    #[test]
    fn test_zero_peak_rejected() {
        let gt = Array2::<u8>::zeros((2, 2));
        let processed = Array2::from_elem((2, 2), 1u8);
        assert_eq!(psnr(gt.view(), processed.view()), Err(MetricsError::ZeroPeak));
    }

    #[test]
    fn test_empty_image_rejected() {
        let gt = Array2::<u8>::zeros((0, 0));
        assert_eq!(psnr(gt.view(), gt.view()), Err(MetricsError::EmptyImage));
    }

    #[test]
    fn test_arguments_are_not_symmetric() {
        // The peak comes from the first argument only.
        let gt = Array2::from_elem((2, 2), 100u8);
        let processed = Array2::from_elem((2, 2), 50u8);
        let forward = psnr(gt.view(), processed.view()).unwrap();
        let reverse = psnr(processed.view(), gt.view()).unwrap();
        assert_relative_eq!(forward - reverse, 20.0 * 2.0f64.log10(), epsilon = 1e-12);
    }
}
