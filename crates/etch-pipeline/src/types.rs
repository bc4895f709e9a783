//! Shared types for the etch pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// intermediate raster data without depending on `image` directly.
pub use image::GrayImage;

/// A 2D point on the drawing surface.
///
/// Surface coordinates follow the plotter convention: +x to the right,
/// +y upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Integer width/height pair, used for grids and surfaces alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width (columns or pixels).
    pub width: u32,
    /// Height (rows or pixels).
    pub height: u32,
}

impl Dimensions {
    /// Create a new pair.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either axis is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One atomic pen movement.
///
/// A planner produces an ordered `Vec<StrokeCommand>`; a renderer must
/// replay it front to back without reordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeCommand {
    /// Lift the pen and reposition to the point.
    MoveTo(Point),
    /// Draw a line from the current position to the point.
    DrawTo(Point),
}

impl StrokeCommand {
    /// The target point of the command.
    #[must_use]
    pub const fn point(self) -> Point {
        match self {
            Self::MoveTo(p) | Self::DrawTo(p) => p,
        }
    }

    /// Returns `true` for [`StrokeCommand::DrawTo`].
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Self::DrawTo(_))
    }
}

/// Why an image could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The image data was empty.
    #[error("input image data is empty")]
    Empty,

    /// The bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors that can occur while turning an image into strokes.
///
/// Every variant is raised before any drawing begins; nothing past
/// configuration validation and decoding can fail.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// The source image could not be read or decoded.
    #[error(transparent)]
    ImageLoad(#[from] ImageLoadError),

    /// A target grid dimension is zero.
    #[error("invalid target dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested grid width.
        width: u32,
        /// Requested grid height.
        height: u32,
    },

    /// The drawable region or cell geometry has no usable area.
    #[error("degenerate layout: {0}")]
    DegenerateLayout(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rows handed to [`PixelGrid::from_rows`](crate::PixelGrid::from_rows)
    /// have differing lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}
