//! rasterlab: spatial denoising filters and a from-scratch separable 2D DFT.
//!
//! Two independent pipelines over grayscale images held as `ndarray::Array2`
//! grids in `(height, width)` order:
//!
//! - **Denoising**: replicate-padded mean and median filtering
//!   ([`image_proc::filters`]) scored against a ground-truth image with PSNR
//!   ([`image_proc::metrics`]).
//! - **Spectral analysis**: a naive, normalized 1D DFT extended separably to
//!   2D ([`spectral::dft`]), with log-magnitude spectrum rendering ([`viz`]).
//!
//! The transforms here are deliberately the direct O(N²) evaluation of the
//! defining sum, with the `1/N` normalization on the forward pass. They are
//! reference kernels, not fast ones.

pub mod image_proc;
pub mod spectral;
pub mod viz;
