//! Boolean pixel grid and run decomposition.
//!
//! A [`PixelGrid`] is the binarized image: `true` cells are ink. It is
//! built once and never mutated. [`runs`] splits each row into maximal
//! horizontal spans of ink, the unit the segment planner draws.

use image::GrayImage;

use crate::types::{Dimensions, SketchError};

/// Immutable `width x height` matrix of ink flags, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PixelGrid {
    /// Threshold a luminance image: a pixel is ink iff its value is
    /// strictly below `threshold`.
    ///
    /// A threshold of 0 therefore produces an empty grid.
    #[must_use]
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        let cells = image.pixels().map(|p| p.0[0] < threshold).collect();
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            cells,
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidDimensions`] if there are no rows or
    /// the first row is empty, and [`SketchError::RaggedGrid`] if any row
    /// differs in length from the first.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, SketchError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(SketchError::InvalidDimensions {
                width: u32::try_from(width).unwrap_or(u32::MAX),
                height: u32::try_from(rows.len()).unwrap_or(u32::MAX),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != width {
                return Err(SketchError::RaggedGrid {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid size as [`Dimensions`] (columns, rows).
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            u32::try_from(self.width).unwrap_or(u32::MAX),
            u32::try_from(self.height).unwrap_or(u32::MAX),
        )
    }

    /// Whether the cell at (`col`, `row`) is ink. Out-of-range cells are blank.
    #[must_use]
    pub fn is_ink(&self, col: usize, row: usize) -> bool {
        col < self.width && self.row(row).is_some_and(|cells| cells[col])
    }

    /// The cells of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Total number of ink cells.
    #[must_use]
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// A maximal span of ink cells in one row, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Row index.
    pub row: usize,
    /// First ink column.
    pub start: usize,
    /// Last ink column (inclusive).
    pub end: usize,
}

impl Run {
    /// Number of cells in the run.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: a run has at least one cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Split every row into maximal ink runs, rows top to bottom and runs
/// left to right.
#[must_use]
pub fn runs(grid: &PixelGrid) -> Vec<Run> {
    let mut out = Vec::new();
    for (row, cells) in grid.rows().enumerate() {
        let mut col = 0;
        while col < cells.len() {
            if !cells[col] {
                col += 1;
                continue;
            }
            let start = col;
            while col < cells.len() && cells[col] {
                col += 1;
            }
            out.push(Run {
                row,
                start,
                end: col - 1,
            });
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn from_luma_thresholds_strictly_below() {
        let img = GrayImage::from_fn(4, 1, |x, _| image::Luma([[0, 139, 140, 255][x as usize]]));
        let grid = PixelGrid::from_luma(&img, 140);
        assert_eq!(grid.row(0).unwrap(), &[T, T, F, F]);
    }

    #[test]
    fn from_luma_zero_threshold_is_blank() {
        let img = GrayImage::from_pixel(3, 3, image::Luma([0]));
        assert_eq!(PixelGrid::from_luma(&img, 0).ink_count(), 0);
    }

    #[test]
    fn from_luma_keeps_dimensions() {
        let img = GrayImage::new(7, 5);
        let grid = PixelGrid::from_luma(&img, 128);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.dimensions(), Dimensions::new(7, 5));
        assert_eq!(grid.rows().len(), 5);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = PixelGrid::from_rows(&[vec![T, F, T], vec![F]]).unwrap_err();
        assert!(matches!(
            err,
            SketchError::RaggedGrid {
                row: 1,
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn from_rows_rejects_empty() {
        let rows: [[bool; 0]; 0] = [];
        assert!(matches!(
            PixelGrid::from_rows(&rows),
            Err(SketchError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelGrid::from_rows(&[Vec::<bool>::new()]),
            Err(SketchError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn is_ink_out_of_range_is_blank() {
        let grid = PixelGrid::from_rows(&[[T, T]]).unwrap();
        assert!(grid.is_ink(1, 0));
        assert!(!grid.is_ink(2, 0));
        assert!(!grid.is_ink(0, 1));
    }

    #[test]
    fn runs_of_scenario_grid() {
        let grid = PixelGrid::from_rows(&[[T, F, T], [F, F, F], [T, T, T]]).unwrap();
        assert_eq!(
            runs(&grid),
            vec![
                Run {
                    row: 0,
                    start: 0,
                    end: 0
                },
                Run {
                    row: 0,
                    start: 2,
                    end: 2
                },
                Run {
                    row: 2,
                    start: 0,
                    end: 2
                },
            ]
        );
    }

    #[test]
    fn full_row_is_one_run() {
        let grid = PixelGrid::from_rows(&[[T; 9]]).unwrap();
        let found = runs(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].len(), 9);
    }

    #[test]
    fn runs_cover_exactly_the_ink_cells() {
        let rows = [
            [F, T, T, F, T, F, F, T],
            [T, F, F, F, F, F, T, T],
            [F, F, F, F, F, F, F, F],
        ];
        let grid = PixelGrid::from_rows(&rows).unwrap();
        let mut rebuilt = [[F; 8]; 3];
        for run in runs(&grid) {
            for col in run.start..=run.end {
                rebuilt[run.row][col] = T;
            }
        }
        assert_eq!(rebuilt, rows);
        assert_eq!(
            runs(&grid).iter().map(Run::len).sum::<usize>(),
            grid.ink_count()
        );
    }
}
