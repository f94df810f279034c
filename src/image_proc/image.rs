//! Conversions between `image` frames and ndarray grids, and grayscale loading.
//!
//! Array dimensions are `(height, width)` while image dimensions are
//! `(width, height)`; array indices `[y, x]` map to pixel coordinates `(x, y)`.

use image::{DynamicImage, GrayImage};
use ndarray::Array2;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or converting image files.
#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("Failed to read image from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Image {0} is empty")]
    EmptyImage(String),
}

/// Converts an ndarray Array2<u8> to an image::GrayImage.
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();
    let mut img = GrayImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x as u32, y as u32, image::Luma([arr[[y, x]]]));
        }
    }

    img
}

/// Converts an image::GrayImage to an ndarray Array2<u8>.
pub fn gray_image_to_array2(img: &GrayImage) -> Array2<u8> {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0]
    })
}

/// Load an image file as an 8-bit grayscale grid.
///
/// Any supported format is decoded with the `image` crate and converted to
/// 8-bit luma.
///
/// # Errors
/// * `ImageIoError::Decode` - the file is missing, unreadable, or not a
///   supported image format
/// * `ImageIoError::EmptyImage` - the decoded frame has zero pixels
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<u8>, ImageIoError> {
    let path = path.as_ref();
    let img = open_image(path)?;
    let gray = img.to_luma8();
    check_non_empty(path, gray.dimensions())?;
    Ok(gray_image_to_array2(&gray))
}

/// Load an image file and reduce it to grayscale as the unweighted mean of
/// the RGB channels.
///
/// This is the channel-mean reduction used by the spectral pipeline: each
/// output sample is `(r + g + b) / 3` in `f64`, not the perceptual luma
/// weighting that [`load_grayscale`] applies.
///
/// # Errors
/// Same conditions as [`load_grayscale`].
pub fn load_rgb_mean_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, ImageIoError> {
    let path = path.as_ref();
    let img = open_image(path)?;
    let rgb = img.to_rgb8();
    check_non_empty(path, rgb.dimensions())?;

    let (width, height) = rgb.dimensions();
    Ok(Array2::from_shape_fn(
        (height as usize, width as usize),
        |(y, x)| {
            let p = rgb.get_pixel(x as u32, y as u32);
            (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0
        },
    ))
}

fn open_image(path: &Path) -> Result<DynamicImage, ImageIoError> {
    image::open(path).map_err(|source| ImageIoError::Decode {
        path: path.display().to_string(),
        source,
    })
}

fn check_non_empty(path: &Path, (width, height): (u32, u32)) -> Result<(), ImageIoError> {
    if width == 0 || height == 0 {
        return Err(ImageIoError::EmptyImage(path.display().to_string()));
    }
    Ok(())
}
