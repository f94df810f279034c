//! Frequency-domain analysis built from a naive 1D DFT.

pub mod dft;

// Re-export key functionality for easier access
pub use dft::{dft_1d, dft_1d_real, dft_2d, SpectrumPair};
