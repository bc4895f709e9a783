//! Stroke planning: turn a pixel grid into ordered pen commands.
//!
//! This module defines the [`StrokePlanner`] trait for pluggable planning
//! strategies and the [`PlannerKind`] enum for selecting one at runtime.
//!
//! # Strategy pattern
//!
//! The two strategies trade cleanliness for continuity:
//! [`SegmentPlanner`] lifts the pen between every run, while
//! [`SerpentinePlanner`] keeps a single path the way a sketching toy must.
//! Both live here with no drawing dependencies so they can be tested
//! headless.

use serde::{Deserialize, Serialize};

use crate::grid::PixelGrid;
use crate::mapper::CellMapper;
use crate::segments::SegmentPlanner;
use crate::serpentine::{GapPolicy, SerpentinePlanner};
use crate::types::StrokeCommand;

/// Trait for stroke planning strategies.
///
/// Input: an ink grid and the mapping from cells to the surface.
/// Output: commands to replay in order. Planning is pure and
/// deterministic: the same grid and mapper always give the same commands.
pub trait StrokePlanner {
    /// Plan the strokes for `grid`.
    fn plan(&self, grid: &PixelGrid, mapper: &CellMapper) -> Vec<StrokeCommand>;
}

/// Selects which planning strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlannerKind {
    /// Disjoint horizontal runs, see [`SegmentPlanner`].
    #[default]
    Segments,

    /// One continuous snaking path, see [`SerpentinePlanner`].
    Serpentine {
        /// How blank cells are crossed.
        #[serde(default)]
        gap_policy: GapPolicy,
    },
}

impl PlannerKind {
    /// Serpentine planning with the default gap policy.
    #[must_use]
    pub const fn serpentine() -> Self {
        Self::Serpentine {
            gap_policy: GapPolicy::Bridge,
        }
    }

    /// Returns `true` when the plan is a single continuous path.
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(
            self,
            Self::Serpentine {
                gap_policy: GapPolicy::Bridge
            }
        )
    }
}

impl StrokePlanner for PlannerKind {
    fn plan(&self, grid: &PixelGrid, mapper: &CellMapper) -> Vec<StrokeCommand> {
        match *self {
            Self::Segments => SegmentPlanner.plan(grid, mapper),
            Self::Serpentine { gap_policy } => SerpentinePlanner::new(gap_policy).plan(grid, mapper),
        }
    }
}
