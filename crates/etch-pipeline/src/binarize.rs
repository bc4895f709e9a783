//! Binarization: photo in, ink grid out.
//!
//! # Steps
//!
//! 1. Decode and convert to luminance
//! 2. Sobel edge magnitude
//! 3. Autocontrast the edge map with outlier clipping
//! 4. Blend luminance and edges
//! 5. Resize to fit the grid, preserving aspect ratio
//! 6. Center on a white canvas of exactly the grid size
//! 7. Threshold into a [`PixelGrid`]
//!
//! [`binarize_staged`] keeps every intermediate raster for inspection;
//! [`binarize`] and [`binarize_path`] return only the grid.

use std::path::Path;

use image::GrayImage;

use crate::config::BinarizeConfig;
use crate::grid::PixelGrid;
use crate::types::SketchError;
use crate::{contrast, edge, fit, grayscale};

/// Every intermediate raster of a binarization run.
#[derive(Debug, Clone)]
pub struct BinarizeStages {
    /// Step 1: decoded luminance at source resolution.
    pub luminance: GrayImage,
    /// Steps 2-3: contrast-stretched edge magnitude.
    pub edges: GrayImage,
    /// Step 4: luminance/edge blend.
    pub blended: GrayImage,
    /// Steps 5-6: blend fitted and centered on the grid-sized canvas.
    pub fitted: GrayImage,
    /// Step 7: the ink grid.
    pub grid: PixelGrid,
}

/// Run steps 2-7 on an already decoded luminance image.
///
/// # Errors
///
/// Returns the validation errors of [`BinarizeConfig::validate`].
pub fn binarize_staged(
    luminance: GrayImage,
    config: &BinarizeConfig,
) -> Result<BinarizeStages, SketchError> {
    config.validate()?;
    tracing::debug!(
        width = luminance.width(),
        height = luminance.height(),
        "binarizing luminance image"
    );

    let edges = contrast::autocontrast(
        &edge::edge_magnitude(&luminance),
        config.autocontrast_cutoff,
    );
    let blended = contrast::blend(&luminance, &edges, config.edge_blend);
    let fitted = fit::fit_to_canvas(&blended, config.target, config.resize_filter);
    let grid = PixelGrid::from_luma(&fitted, config.threshold);

    tracing::debug!(
        columns = grid.width(),
        rows = grid.height(),
        ink = grid.ink_count(),
        "binarized grid"
    );

    Ok(BinarizeStages {
        luminance,
        edges,
        blended,
        fitted,
        grid,
    })
}

/// Binarize encoded image bytes.
///
/// # Errors
///
/// Returns [`SketchError::InvalidDimensions`] or
/// [`SketchError::InvalidConfig`] for a bad config (checked before
/// decoding) and [`SketchError::ImageLoad`] if the bytes do not decode.
pub fn binarize(bytes: &[u8], config: &BinarizeConfig) -> Result<PixelGrid, SketchError> {
    config.validate()?;
    let luminance = grayscale::decode_and_grayscale(bytes)?;
    Ok(binarize_staged(luminance, config)?.grid)
}

/// Binarize the image file at `path`.
///
/// # Errors
///
/// Same as [`binarize`], plus [`SketchError::ImageLoad`] if the file
/// cannot be read.
pub fn binarize_path(path: &Path, config: &BinarizeConfig) -> Result<PixelGrid, SketchError> {
    config.validate()?;
    let luminance = grayscale::load_grayscale(path)?;
    Ok(binarize_staged(luminance, config)?.grid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Dimensions, ImageLoadError};

    fn encode_png(img: &image::RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    fn config(width: u32, height: u32) -> BinarizeConfig {
        BinarizeConfig {
            target: Dimensions::new(width, height),
            ..BinarizeConfig::default()
        }
    }

    /// Black square in the middle of a white field.
    fn square_png(size: u32) -> Vec<u8> {
        let lo = size / 4;
        let hi = size - lo;
        let img = image::RgbaImage::from_fn(size, size, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        });
        encode_png(&img)
    }

    #[test]
    fn grid_has_target_dimensions_for_any_source() {
        for (w, h) in [(1, 1), (13, 200), (300, 40), (64, 64)] {
            let img = image::RgbaImage::from_pixel(w, h, image::Rgba([90, 90, 90, 255]));
            let grid = binarize(&encode_png(&img), &config(22, 28)).unwrap();
            assert_eq!((grid.width(), grid.height()), (22, 28), "source {w}x{h}");
        }
    }

    #[test]
    fn white_image_has_no_ink() {
        let img = image::RgbaImage::from_pixel(30, 30, image::Rgba([255, 255, 255, 255]));
        let grid = binarize(&encode_png(&img), &config(20, 20)).unwrap();
        assert_eq!(grid.ink_count(), 0);
    }

    #[test]
    fn dark_square_is_inked_and_margins_are_not() {
        let grid = binarize(&square_png(40), &config(40, 40)).unwrap();
        assert!(grid.is_ink(20, 20), "center of the square should be ink");
        assert!(!grid.is_ink(2, 2), "white corner should be blank");
    }

    #[test]
    fn letterbox_margins_are_blank() {
        // A black landscape image fitted into a square grid leaves white
        // bands above and below.
        let img = image::RgbaImage::from_pixel(40, 10, image::Rgba([0, 0, 0, 255]));
        let grid = binarize(&encode_png(&img), &config(40, 40)).unwrap();
        assert!(grid.row(0).unwrap().iter().all(|&c| !c));
        assert!(grid.row(39).unwrap().iter().all(|&c| !c));
        assert!(grid.is_ink(20, 20));
    }

    #[test]
    fn staged_keeps_intermediates() {
        let luminance = grayscale::decode_and_grayscale(&square_png(32)).unwrap();
        let stages = binarize_staged(luminance, &config(16, 8)).unwrap();
        assert_eq!(stages.luminance.dimensions(), (32, 32));
        assert_eq!(stages.edges.dimensions(), (32, 32));
        assert_eq!(stages.blended.dimensions(), (32, 32));
        assert_eq!(stages.fitted.dimensions(), (16, 8));
        assert_eq!(stages.grid.dimensions(), Dimensions::new(16, 8));
    }

    #[test]
    fn zero_dimension_is_rejected_before_decoding() {
        let result = binarize(&[], &config(0, 10));
        assert!(matches!(
            result,
            Err(SketchError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn undecodable_bytes_are_image_load_errors() {
        let result = binarize(&[1, 2, 3], &config(10, 10));
        assert!(matches!(
            result,
            Err(SketchError::ImageLoad(ImageLoadError::Decode(_)))
        ));
    }

    #[test]
    fn missing_path_is_image_load_error() {
        let result = binarize_path(Path::new("/nope/missing.png"), &config(10, 10));
        assert!(matches!(
            result,
            Err(SketchError::ImageLoad(ImageLoadError::Read { .. }))
        ));
    }
}
