//! Image decoding and luminance conversion.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) or a filesystem path and
//! produces a single-channel grayscale image. This is the first step of
//! binarization.

use std::path::Path;

use image::GrayImage;

use crate::types::ImageLoadError;

/// Decode raw image bytes and convert to grayscale.
///
/// # Errors
///
/// Returns [`ImageLoadError::Empty`] if `bytes` is empty.
/// Returns [`ImageLoadError::Decode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded grayscale image"]
pub fn decode_and_grayscale(bytes: &[u8]) -> Result<GrayImage, ImageLoadError> {
    if bytes.is_empty() {
        return Err(ImageLoadError::Empty);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_luma8())
}

/// Read an image file and convert it to grayscale.
///
/// The file is read in one shot and the handle released before decoding.
///
/// # Errors
///
/// Returns [`ImageLoadError::Read`] if the file cannot be read, otherwise
/// the same errors as [`decode_and_grayscale`].
#[must_use = "returns the decoded grayscale image"]
pub fn load_grayscale(path: &Path) -> Result<GrayImage, ImageLoadError> {
    let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_and_grayscale(&bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

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

    #[test]
    fn empty_input_returns_error() {
        let result = decode_and_grayscale(&[]);
        assert!(matches!(result, Err(ImageLoadError::Empty)));
    }

    #[test]
    fn corrupt_bytes_returns_decode_error() {
        let result = decode_and_grayscale(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(ImageLoadError::Decode(_))));
    }

    #[test]
    fn white_png_decodes_to_white() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
        let gray = decode_and_grayscale(&encode_png(&img)).unwrap();
        assert!(gray.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = image::RgbaImage::from_pixel(17, 31, image::Rgba([128, 64, 32, 255]));
        let gray = decode_and_grayscale(&encode_png(&img)).unwrap();
        assert_eq!(gray.dimensions(), (17, 31));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = load_grayscale(Path::new("/definitely/not/here.png"));
        assert!(
            matches!(result, Err(ImageLoadError::Read { ref path, .. }) if path.ends_with("here.png"))
        );
    }
}
