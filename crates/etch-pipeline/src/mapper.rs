//! Grid cell to drawing-surface coordinate transform.
//!
//! The transform is:
//!
//! ```text
//! x = origin_x + col × cell_width
//! y = origin_y − row × cell_height
//! ```
//!
//! Grid rows count downward, surface +y points upward, so the row axis is
//! flipped. Column and row may equal the grid size to address the far
//! border of the last cell.

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, Point, SketchError};

/// Maps grid cell corners onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMapper {
    cell_width: f64,
    cell_height: f64,
    origin: Point,
}

impl CellMapper {
    /// Create a mapper with the given cell size and top-left origin.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::DegenerateLayout`] if a cell dimension is not
    /// finite and positive, or the origin is not finite.
    pub fn new(cell_width: f64, cell_height: f64, origin: Point) -> Result<Self, SketchError> {
        if !(cell_width.is_finite() && cell_width > 0.0) {
            return Err(SketchError::DegenerateLayout(format!(
                "cell width must be finite and positive, got {cell_width}"
            )));
        }
        if !(cell_height.is_finite() && cell_height > 0.0) {
            return Err(SketchError::DegenerateLayout(format!(
                "cell height must be finite and positive, got {cell_height}"
            )));
        }
        if !origin.is_finite() {
            return Err(SketchError::DegenerateLayout(format!(
                "origin must be finite, got ({}, {})",
                origin.x, origin.y
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
            origin,
        })
    }

    /// Lay out a grid on a surface centered on (0, 0), leaving `padding`
    /// on every side.
    ///
    /// The drawable region is `surface − 2 × padding` per axis; cells are
    /// stretched independently on each axis to fill it, and the origin is
    /// the region's top-left corner.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::DegenerateLayout`] if the drawable region has
    /// no area or the grid is empty.
    pub fn fit(surface: Dimensions, padding: f64, grid: Dimensions) -> Result<Self, SketchError> {
        let drawable_w = 2.0f64.mul_add(-padding, f64::from(surface.width));
        let drawable_h = 2.0f64.mul_add(-padding, f64::from(surface.height));
        if !(drawable_w > 0.0 && drawable_h > 0.0) {
            return Err(SketchError::DegenerateLayout(format!(
                "{}x{} surface with padding {padding} leaves no drawable area",
                surface.width, surface.height
            )));
        }
        if grid.is_empty() {
            return Err(SketchError::DegenerateLayout(format!(
                "cannot lay out an empty {}x{} grid",
                grid.width, grid.height
            )));
        }

        Self::new(
            drawable_w / f64::from(grid.width),
            drawable_h / f64::from(grid.height),
            Point::new(-drawable_w / 2.0, drawable_h / 2.0),
        )
    }

    /// Surface position of the top-left corner of cell (`col`, `row`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn map(&self, col: usize, row: usize) -> Point {
        Point::new(
            (col as f64).mul_add(self.cell_width, self.origin.x),
            (row as f64).mul_add(-self.cell_height, self.origin.y),
        )
    }

    /// Width of one cell on the surface.
    #[must_use]
    pub const fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of one cell on the surface.
    #[must_use]
    pub const fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Surface position of cell (0, 0).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }
}
