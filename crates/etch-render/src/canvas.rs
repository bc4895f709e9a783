//! Raster drawing surface backed by `tiny-skia`.
//!
//! The canvas is centered on the surface origin with +y up, matching the
//! coordinates [`etch_pipeline::CellMapper::fit`] lays the grid out in.
//! Each `line_to` is stroked immediately, so the pixmap always shows the
//! drawing as far as it has been replayed.

use etch_pipeline::{Dimensions, Point};
use image::{Rgba, RgbaImage};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::DrawingSurface;
use crate::color::Rgb;

/// Cosmetic parameters of a [`Canvas`]. The pipeline never reads these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasStyle {
    /// Fill color of the empty surface.
    pub background: Rgb,
    /// Color of drawn lines.
    pub pen: Rgb,
    /// Line width in surface units.
    pub line_width: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: Rgb::SAND,
            pen: Rgb::GRAPHITE,
            line_width: 1.0,
        }
    }
}

/// Errors creating a [`Canvas`].
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The requested pixmap has no pixels or is too large to allocate.
    #[error("cannot allocate a {}x{} canvas", .0.width, .0.height)]
    Allocation(Dimensions),
}

/// A pixmap the pen draws on.
pub struct Canvas {
    pixmap: Pixmap,
    paint: Paint<'static>,
    stroke: Stroke,
    transform: Transform,
    pen: Option<Point>,
    lines: usize,
}

impl Canvas {
    /// Create a canvas of `size` pixels filled with the style background.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Allocation`] if either dimension is zero or
    /// the pixmap is too large.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: Dimensions, style: CanvasStyle) -> Result<Self, CanvasError> {
        let mut pixmap =
            Pixmap::new(size.width, size.height).ok_or(CanvasError::Allocation(size))?;
        let Rgb(r, g, b) = style.background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));

        let mut paint = Paint::default();
        let Rgb(r, g, b) = style.pen;
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.line_width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Stroke::default()
        };

        // Surface origin at the pixmap center, +y up.
        let transform = Transform::from_row(
            1.0,
            0.0,
            0.0,
            -1.0,
            size.width as f32 / 2.0,
            size.height as f32 / 2.0,
        );

        Ok(Self {
            pixmap,
            paint,
            stroke,
            transform,
            pen: None,
            lines: 0,
        })
    }

    /// The underlying pixmap.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Number of non-degenerate lines stroked so far.
    #[must_use]
    pub const fn lines_drawn(&self) -> usize {
        self.lines
    }

    /// Color of the pixel at (`x`, `y`), counted from the top-left.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb(c.red(), c.green(), c.blue()))
    }

    /// Copy the canvas into an `RgbaImage`, e.g. to save a snapshot.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        RgbaImage::from_fn(width, height, |x, y| {
            self.pixmap.pixel(x, y).map_or(Rgba([0, 0, 0, 0]), |p| {
                let c = p.demultiply();
                Rgba([c.red(), c.green(), c.blue(), c.alpha()])
            })
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_line(&mut self, from: Point, to: Point) {
        if from == to {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap
            .stroke_path(&path, &self.paint, &self.stroke, self.transform, None);
        self.lines += 1;
    }
}

impl DrawingSurface for Canvas {
    fn move_to(&mut self, to: Point) {
        self.pen = Some(to);
    }

    fn line_to(&mut self, to: Point) {
        if let Some(from) = self.pen {
            self.stroke_line(from, to);
        }
        self.pen = Some(to);
    }
}
