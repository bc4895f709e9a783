//! Run configuration.
//!
//! [`SketchConfig`] gathers every knob of a run into one immutable value
//! that is passed to [`crate::sketch`]. It deserializes from partial JSON:
//! missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::fit::ResizeFilter;
use crate::planner::PlannerKind;
use crate::types::{Dimensions, SketchError};

/// Binarization parameters, the subset of [`SketchConfig`] the
/// [`binarize`](crate::binarize) stage reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinarizeConfig {
    /// Grid size in cells.
    pub target: Dimensions,
    /// A pixel is ink iff its blended luminance is below this.
    pub threshold: u8,
    /// Weight of the edge map in the luminance/edge blend, in `[0, 1]`.
    pub edge_blend: f32,
    /// Percentage of pixels clipped at each end of the edge histogram
    /// before it is stretched, in `[0, 50)`.
    pub autocontrast_cutoff: f32,
    /// Filter used to resize into the grid.
    pub resize_filter: ResizeFilter,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            target: Dimensions::new(
                SketchConfig::DEFAULT_TARGET_WIDTH,
                SketchConfig::DEFAULT_TARGET_HEIGHT,
            ),
            threshold: SketchConfig::DEFAULT_THRESHOLD,
            edge_blend: SketchConfig::DEFAULT_EDGE_BLEND,
            autocontrast_cutoff: SketchConfig::DEFAULT_AUTOCONTRAST_CUTOFF,
            resize_filter: ResizeFilter::default(),
        }
    }
}

impl BinarizeConfig {
    /// Check that every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidDimensions`] if a target dimension is
    /// zero and [`SketchError::InvalidConfig`] if the blend weight or
    /// cutoff is out of range.
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.target.is_empty() {
            return Err(SketchError::InvalidDimensions {
                width: self.target.width,
                height: self.target.height,
            });
        }
        if !(0.0..=1.0).contains(&self.edge_blend) {
            return Err(SketchError::InvalidConfig(format!(
                "edge_blend must be in [0, 1], got {}",
                self.edge_blend
            )));
        }
        if !(0.0..50.0).contains(&self.autocontrast_cutoff) {
            return Err(SketchError::InvalidConfig(format!(
                "autocontrast_cutoff must be in [0, 50), got {}",
                self.autocontrast_cutoff
            )));
        }
        Ok(())
    }
}

/// Configuration for a full image-to-strokes run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Grid columns.
    pub target_width: u32,
    /// Grid rows.
    pub target_height: u32,
    /// Ink threshold, see [`BinarizeConfig::threshold`].
    pub threshold: u8,
    /// See [`BinarizeConfig::edge_blend`].
    pub edge_blend: f32,
    /// See [`BinarizeConfig::autocontrast_cutoff`].
    pub autocontrast_cutoff: f32,
    /// See [`BinarizeConfig::resize_filter`].
    pub resize_filter: ResizeFilter,
    /// Pen width on the surface. Only the renderer reads it.
    pub line_width: f64,
    /// Blank border around the drawing, in surface units.
    pub padding: f64,
    /// Size of the drawing surface.
    pub surface: Dimensions,
    /// Stroke planning strategy.
    pub planner: PlannerKind,
}

impl SketchConfig {
    /// Default grid columns.
    pub const DEFAULT_TARGET_WIDTH: u32 = 220;
    /// Default grid rows.
    pub const DEFAULT_TARGET_HEIGHT: u32 = 280;
    /// Default ink threshold.
    pub const DEFAULT_THRESHOLD: u8 = 140;
    /// Default edge blend weight.
    pub const DEFAULT_EDGE_BLEND: f32 = 0.35;
    /// Default autocontrast cutoff, in percent.
    pub const DEFAULT_AUTOCONTRAST_CUTOFF: f32 = 2.0;
    /// Default pen width.
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
    /// Default border around the drawing.
    pub const DEFAULT_PADDING: f64 = 40.0;
    /// Default surface edge length (square).
    pub const DEFAULT_SURFACE_SIZE: u32 = 1000;

    /// The binarization parameters of this config.
    #[must_use]
    pub const fn binarize_config(&self) -> BinarizeConfig {
        BinarizeConfig {
            target: Dimensions::new(self.target_width, self.target_height),
            threshold: self.threshold,
            edge_blend: self.edge_blend,
            autocontrast_cutoff: self.autocontrast_cutoff,
            resize_filter: self.resize_filter,
        }
    }

    /// Check every field before any work starts.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidDimensions`] for a zero grid size,
    /// [`SketchError::DegenerateLayout`] for an empty surface, and
    /// [`SketchError::InvalidConfig`] for out-of-range numeric fields.
    pub fn validate(&self) -> Result<(), SketchError> {
        self.binarize_config().validate()?;

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "line_width must be finite and positive, got {}",
                self.line_width
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "padding must be finite and non-negative, got {}",
                self.padding
            )));
        }
        if self.surface.is_empty() {
            return Err(SketchError::DegenerateLayout(format!(
                "surface must be non-empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            target_width: Self::DEFAULT_TARGET_WIDTH,
            target_height: Self::DEFAULT_TARGET_HEIGHT,
            threshold: Self::DEFAULT_THRESHOLD,
            edge_blend: Self::DEFAULT_EDGE_BLEND,
            autocontrast_cutoff: Self::DEFAULT_AUTOCONTRAST_CUTOFF,
            resize_filter: ResizeFilter::default(),
            line_width: Self::DEFAULT_LINE_WIDTH,
            padding: Self::DEFAULT_PADDING,
            surface: Dimensions::new(Self::DEFAULT_SURFACE_SIZE, Self::DEFAULT_SURFACE_SIZE),
            planner: PlannerKind::default(),
        }
    }
}
