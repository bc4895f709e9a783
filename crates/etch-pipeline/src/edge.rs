//! Edge magnitude map.
//!
//! Wraps [`imageproc::gradients::sobel_gradients`] to highlight
//! high-frequency boundaries in the luminance image. Unlike a Canny edge
//! map the output is a continuous magnitude, so it can be blended back
//! into the source to darken outlines without erasing shading.

use image::{GrayImage, Luma};

/// Compute the Sobel gradient magnitude of a grayscale image.
///
/// Magnitudes above 255 saturate, so the output fits a regular
/// [`GrayImage`] of the same dimensions. Flat regions map to 0.
#[must_use = "returns the edge magnitude map"]
pub fn edge_magnitude(image: &GrayImage) -> GrayImage {
    let gradients = imageproc::gradients::sobel_gradients(image);
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let magnitude = gradients.get_pixel(x, y).0[0];
        Luma([u8::try_from(magnitude).unwrap_or(u8::MAX)])
    })
}
