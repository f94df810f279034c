//! Spectral-analysis pipeline.
//!
//! Loads an image, reduces it to grayscale as the unweighted channel mean,
//! computes the separable 2D DFT, and writes the original plus the shifted
//! log-magnitude spectra of the row pass and the full transform.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rasterlab::image_proc::image::load_rgb_mean_grayscale;
use rasterlab::spectral::dft_2d;
use rasterlab::viz::{normalize_to_gray, save_gray, spectrum_to_gray_image};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "spectrum",
    about = "Compute the separable 2D DFT of an image and render its log-magnitude spectra",
    long_about = None
)]
struct Args {
    /// Path to the input image
    #[arg(long)]
    image: PathBuf,

    /// Directory for rendered spectrum images
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let gray = load_rgb_mean_grayscale(&args.image)
        .with_context(|| format!("loading image {}", args.image.display()))?;
    info!("Loaded {:?} grayscale grid", gray.dim());

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output dir {}", args.output_dir.display()))?;

    let spectra = dft_2d(gray.view());
    info!("Computed row-pass and full spectra");

    let original = normalize_to_gray(gray.view())?;
    let row_pass = spectrum_to_gray_image(spectra.row_pass.view())?;
    let full = spectrum_to_gray_image(spectra.full.view())?;

    for (image, name) in [
        (&original, "original.png"),
        (&row_pass, "row_spectrum.png"),
        (&full, "full_spectrum.png"),
    ] {
        let path = args.output_dir.join(name);
        save_gray(image, &path)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
