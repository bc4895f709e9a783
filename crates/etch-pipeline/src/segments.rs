//! Segment planner: one lifted move and one draw per ink run.
//!
//! Rows are scanned top to bottom, runs left to right. Each run becomes
//! `MoveTo(start corner)` followed by `DrawTo(corner one past the end)`,
//! so the stroke covers the full width of every cell in the run. Nothing
//! is drawn between runs or between rows.

use crate::grid::{self, PixelGrid};
use crate::mapper::CellMapper;
use crate::planner::StrokePlanner;
use crate::types::StrokeCommand;

/// Draws disjoint horizontal runs, lifting the pen between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentPlanner;

impl StrokePlanner for SegmentPlanner {
    fn plan(&self, grid: &PixelGrid, mapper: &CellMapper) -> Vec<StrokeCommand> {
        let runs = grid::runs(grid);
        let mut commands = Vec::with_capacity(runs.len() * 2);
        for run in runs {
            commands.push(StrokeCommand::MoveTo(mapper.map(run.start, run.row)));
            commands.push(StrokeCommand::DrawTo(mapper.map(run.end + 1, run.row)));
        }
        commands
    }
}
