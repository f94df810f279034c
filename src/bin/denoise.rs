//! Spatial-domain denoising pipeline.
//!
//! Loads a noisy grayscale image and its ground truth, smooths the noisy
//! frame with mean and median filters, prints the PSNR of each result
//! against the ground truth, and writes before/after panels for inspection.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rasterlab::image_proc::image::{array2_to_gray_image, load_grayscale};
use rasterlab::image_proc::{mean_filter, median_filter, psnr};
use rasterlab::viz::{save_gray, side_by_side};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "denoise",
    about = "Smooth a noisy grayscale image with mean and median filters and score each with PSNR",
    long_about = None
)]
struct Args {
    /// Path to the noisy input image
    #[arg(long)]
    noisy: PathBuf,

    /// Path to the ground-truth image used for PSNR scoring
    #[arg(long)]
    ground_truth: PathBuf,

    /// Square filter window size (odd, e.g. 3, 5, 7)
    #[arg(long, default_value_t = 3)]
    filter_size: usize,

    /// Directory for before/after comparison images
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let noisy = load_grayscale(&args.noisy)
        .with_context(|| format!("loading noisy image {}", args.noisy.display()))?;
    let ground_truth = load_grayscale(&args.ground_truth)
        .with_context(|| format!("loading ground truth {}", args.ground_truth.display()))?;
    info!(
        "Loaded noisy {:?} and ground truth {:?}",
        noisy.dim(),
        ground_truth.dim()
    );

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output dir {}", args.output_dir.display()))?;

    let before = array2_to_gray_image(&noisy);

    let mean_smoothed = mean_filter(noisy.view(), args.filter_size)?;
    let mean_score = psnr(ground_truth.view(), mean_smoothed.view())?;
    println!("PSNR score of mean filter: {mean_score}");

    let mean_panel = side_by_side(&[&before, &array2_to_gray_image(&mean_smoothed)])?;
    let mean_path = args.output_dir.join("mean_before_after.png");
    save_gray(&mean_panel, &mean_path)?;
    info!("Wrote {}", mean_path.display());

    let median_smoothed = median_filter(noisy.view(), args.filter_size)?;
    let median_score = psnr(ground_truth.view(), median_smoothed.view())?;
    println!("PSNR score of median filter: {median_score}");

    let median_panel = side_by_side(&[&before, &array2_to_gray_image(&median_smoothed)])?;
    let median_path = args.output_dir.join("median_before_after.png");
    save_gray(&median_panel, &median_path)?;
    info!("Wrote {}", median_path.display());

    Ok(())
}
