//! Spatial-domain image processing: padding, smoothing filters, and quality
//! metrics, plus the thin conversions between `image` frames and ndarray grids.

pub mod filters;
pub mod image;
pub mod metrics;
pub mod padding;

// Re-export key functionality for easier access
pub use filters::{mean_filter, median_filter, FilterError};
pub use metrics::{psnr, MetricsError};
pub use padding::replicate_pad;
