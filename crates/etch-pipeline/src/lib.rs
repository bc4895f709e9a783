//! etch-pipeline: turn a raster image into axis-aligned pen strokes.
//!
//! Converts an image into an ordered list of pen commands through:
//! luminance -> edge boost -> fit to grid -> threshold -> stroke planning.
//!
//! This crate draws nothing. It returns [`StrokeCommand`]s that a
//! renderer replays against whatever surface it owns (see `etch-render`).

pub mod binarize;
pub mod config;
pub mod contrast;
pub mod edge;
pub mod fit;
pub mod grayscale;
pub mod grid;
pub mod mapper;
pub mod planner;
pub mod segments;
pub mod serpentine;
pub mod stats;
pub mod types;

use std::path::Path;

pub use binarize::{BinarizeStages, binarize, binarize_path, binarize_staged};
pub use config::{BinarizeConfig, SketchConfig};
pub use fit::ResizeFilter;
pub use grid::{PixelGrid, Run, runs};
pub use mapper::CellMapper;
pub use planner::{PlannerKind, StrokePlanner};
pub use segments::SegmentPlanner;
pub use serpentine::{GapPolicy, SerpentinePlanner};
pub use stats::PlanStats;
pub use types::{Dimensions, ImageLoadError, Point, SketchError, StrokeCommand};

/// Output of a full run: the grid, its layout, and the strokes to draw.
#[derive(Debug, Clone)]
pub struct Sketch {
    /// The binarized ink grid.
    pub grid: PixelGrid,
    /// Cell-to-surface mapping used for planning.
    pub mapper: CellMapper,
    /// Ordered pen commands.
    pub commands: Vec<StrokeCommand>,
}

impl Sketch {
    /// Summary metrics of [`Self::commands`].
    #[must_use]
    pub fn stats(&self) -> PlanStats {
        PlanStats::measure(&self.commands)
    }
}

/// Run the full pipeline on the image at `image_path`.
///
/// # Pipeline steps
///
/// 1. Validate `config`
/// 2. Binarize the image into a `target_width x target_height` grid
/// 3. Lay the grid out on `config.surface` with `config.padding`
/// 4. Plan strokes with `config.planner`
///
/// # Errors
///
/// Returns [`SketchError::InvalidDimensions`], [`SketchError::InvalidConfig`]
/// or [`SketchError::DegenerateLayout`] for a bad configuration, all
/// before the image is touched. Returns [`SketchError::ImageLoad`] if the
/// image cannot be read or decoded.
pub fn sketch(image_path: &Path, config: &SketchConfig) -> Result<Sketch, SketchError> {
    config.validate()?;
    let grid_size = Dimensions::new(config.target_width, config.target_height);
    let mapper = CellMapper::fit(config.surface, config.padding, grid_size)?;

    tracing::debug!(path = %image_path.display(), "loading image");
    let grid = binarize_path(image_path, &config.binarize_config())?;
    Ok(plan_grid(grid, mapper, config.planner))
}

/// Plan strokes for an existing grid.
#[must_use]
pub fn plan_grid(grid: PixelGrid, mapper: CellMapper, planner: PlannerKind) -> Sketch {
    let commands = planner.plan(&grid, &mapper);
    let sketch = Sketch {
        grid,
        mapper,
        commands,
    };

    let stats = sketch.stats();
    tracing::info!(
        ?planner,
        moves = stats.moves,
        draws = stats.draws,
        drawn_length = stats.drawn_length,
        travel_length = stats.travel_length,
        "planned strokes"
    );
    sketch
}
