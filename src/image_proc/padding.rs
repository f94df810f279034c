//! Replicate (clamp-to-edge) border padding.

use ndarray::{Array2, ArrayView2};

/// Pad a grid by `pad` samples on every side using replicate padding.
///
/// Out-of-bounds samples take the value of the nearest in-bounds edge sample:
/// `padded[[i, j]] == image[[clamp(i - pad, 0, H-1), clamp(j - pad, 0, W-1)]]`.
/// Corners replicate the corner value. With `pad == 0` the result is an exact
/// copy of the input.
///
/// # Arguments
/// * `image` - Non-empty source grid in `(height, width)` order
/// * `pad` - Number of replicated samples added per side
///
/// # Returns
/// A grid of shape `(H + 2*pad, W + 2*pad)` whose center region equals the
/// input exactly.
///
/// # Panics
/// Panics if the input has zero rows or columns; callers validate shape first.
pub fn replicate_pad<T: Copy>(image: ArrayView2<T>, pad: usize) -> Array2<T> {
    let (height, width) = image.dim();
    assert!(
        height > 0 && width > 0,
        "replicate_pad requires a non-empty grid"
    );

    Array2::from_shape_fn((height + 2 * pad, width + 2 * pad), |(i, j)| {
        let src_i = i.saturating_sub(pad).min(height - 1);
        let src_j = j.saturating_sub(pad).min(width - 1);
        image[[src_i, src_j]]
    })
}
