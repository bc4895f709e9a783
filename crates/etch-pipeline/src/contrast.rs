//! Contrast normalization and blending.
//!
//! [`autocontrast`] stretches an image's histogram to the full 0..=255
//! range after clipping a percentage of outliers at each end, so a single
//! hot pixel cannot dominate the range. [`blend`] mixes two images of the
//! same size with a fixed weight.

use image::{GrayImage, Luma};

/// Stretch the histogram of `image` to 0..=255.
///
/// `cutoff_percent` of the pixels are discarded from each end of the
/// histogram before the low and high bounds are picked. When the
/// remaining histogram spans fewer than two levels the image is returned
/// unchanged.
#[must_use = "returns the contrast-stretched image"]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn autocontrast(image: &GrayImage, cutoff_percent: f32) -> GrayImage {
    let mut histogram = [0u64; 256];
    for pixel in image.pixels() {
        histogram[usize::from(pixel.0[0])] += 1;
    }

    let total: u64 = histogram.iter().sum();
    let cut = (total as f64 * f64::from(cutoff_percent.max(0.0)) / 100.0) as u64;

    let (Some(lo), Some(hi)) = (
        clipped_bound(histogram.iter().enumerate(), cut),
        clipped_bound(histogram.iter().enumerate().rev(), cut),
    ) else {
        return image.clone();
    };
    if hi <= lo {
        return image.clone();
    }

    let span = hi - lo;
    let lut: [u8; 256] = std::array::from_fn(|level| {
        let stretched = level.saturating_sub(lo) * 255 / span;
        u8::try_from(stretched).unwrap_or(u8::MAX)
    });

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([lut[usize::from(image.get_pixel(x, y).0[0])]])
    })
}

/// First histogram level whose cumulative count exceeds `cut`.
fn clipped_bound<'a>(
    levels: impl Iterator<Item = (usize, &'a u64)>,
    cut: u64,
) -> Option<usize> {
    let mut seen = 0u64;
    for (level, &count) in levels {
        seen += count;
        if seen > cut {
            return Some(level);
        }
    }
    None
}

/// Blend two images: `(1 - weight) * base + weight * overlay`.
///
/// `weight` is clamped to `[0, 1]`. Both images must have the same
/// dimensions; pixels outside `overlay` are taken from `base` unchanged.
#[must_use = "returns the blended image"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(base: &GrayImage, overlay: &GrayImage, weight: f32) -> GrayImage {
    let weight = weight.clamp(0.0, 1.0);
    GrayImage::from_fn(base.width(), base.height(), |x, y| {
        let b = f32::from(base.get_pixel(x, y).0[0]);
        let Some(o) = overlay.get_pixel_checked(x, y) else {
            return Luma([b as u8]);
        };
        let mixed = (f32::from(o.0[0]) - b).mul_add(weight, b);
        Luma([mixed.round().clamp(0.0, 255.0) as u8])
    })
}
