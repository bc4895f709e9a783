//! Fit an image into the target grid.
//!
//! The blended image is resized so it fits inside the grid while keeping
//! its aspect ratio, then pasted centered onto a white canvas of exactly
//! the grid size. Nothing is cropped or stretched; the leftover margin is
//! white and therefore never inked.

use std::fmt;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Background level of the padding canvas.
pub const CANVAS_FILL: u8 = 255;

/// Resampling filter used when fitting the image to the grid.
///
/// Ordered from fastest/lowest-quality to slowest/highest-quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest-neighbor: fastest, blocky artifacts.
    Nearest,
    /// Bilinear interpolation: fast, decent quality.
    Triangle,
    /// Bicubic (Catmull-Rom): moderate speed, good quality.
    #[default]
    CatmullRom,
    /// Gaussian: moderate speed, smooth output.
    Gaussian,
    /// Lanczos with 3 lobes: slowest, sharpest.
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the `image` crate's `FilterType`.
    const fn to_image_filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("Nearest"),
            Self::Triangle => f.write_str("Triangle"),
            Self::CatmullRom => f.write_str("CatmullRom"),
            Self::Gaussian => f.write_str("Gaussian"),
            Self::Lanczos3 => f.write_str("Lanczos3"),
        }
    }
}

/// Largest size with the aspect ratio of `source` that fits in `target`.
///
/// The axis that binds takes the target size exactly; the other is
/// rounded and kept in `1..=target`. Upscaling is allowed.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn contain_size(source: Dimensions, target: Dimensions) -> Dimensions {
    if source.is_empty() {
        return Dimensions::new(target.width.min(1), target.height.min(1));
    }

    // Compare aspect ratios exactly: sw/sh vs tw/th.
    let wide = u64::from(source.width) * u64::from(target.height);
    let tall = u64::from(target.width) * u64::from(source.height);

    if wide > tall {
        let height = (f64::from(source.height) / f64::from(source.width)
            * f64::from(target.width))
        .round() as u32;
        Dimensions::new(target.width, height.clamp(1, target.height))
    } else if wide < tall {
        let width = (f64::from(source.width) / f64::from(source.height)
            * f64::from(target.height))
        .round() as u32;
        Dimensions::new(width.clamp(1, target.width), target.height)
    } else {
        target
    }
}

/// Resize `image` to fit inside `target` and center it on a white canvas.
///
/// The paste offset is `((target - fitted) / 2)` per axis, rounded down.
/// The result always has exactly `target` dimensions.
#[must_use = "returns the fitted image"]
pub fn fit_to_canvas(image: &GrayImage, target: Dimensions, filter: ResizeFilter) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(target.width, target.height, Luma([CANVAS_FILL]));
    let source = Dimensions::new(image.width(), image.height());
    if source.is_empty() || target.is_empty() {
        return canvas;
    }
    let fitted = contain_size(source, target);

    let resized = if fitted == source {
        image.clone()
    } else {
        imageops::resize(
            image,
            fitted.width,
            fitted.height,
            filter.to_image_filter(),
        )
    };

    let offset_x = (target.width - fitted.width) / 2;
    let offset_y = (target.height - fitted.height) / 2;
    imageops::replace(
        &mut canvas,
        &resized,
        i64::from(offset_x),
        i64::from(offset_y),
    );
    canvas
}
