//! Serpentine planner: one continuous boustrophedon path.
//!
//! The pen starts on the left border of the first row and snakes down the
//! grid: even rows scan left to right, odd rows right to left. Strokes run
//! along the vertical middle of each row. Every ink cell contributes two
//! points spanning exactly that cell in the scan direction. At the end of
//! a row the path runs out to the trailing border and steps down to the
//! next row along it, outside the drawn interior.
//!
//! ```text
//!   start ─▶ ▬ ▬   ▬▬▬ ─┐
//!          ┌─ ▬▬   ▬  ◀─┘
//!          └─▶ ▬▬▬ ▬ ───┐
//! ```
//!
//! How blank cells between ink are crossed is a [`GapPolicy`].

use serde::{Deserialize, Serialize};

use crate::grid::PixelGrid;
use crate::mapper::CellMapper;
use crate::planner::StrokePlanner;
use crate::types::{Point, StrokeCommand};

/// How the serpentine path crosses blank cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GapPolicy {
    /// Keep the pen down and jump straight to the next ink cell.
    ///
    /// The whole drawing stays a single path (one `MoveTo`), at the cost
    /// of visible lines across blank gaps. This is the sketching-toy look.
    #[default]
    Bridge,

    /// Lift the pen across blank gaps, including the stretch between the
    /// last ink cell and the trailing border. Connectors between rows are
    /// still drawn.
    Lift,
}

/// Draws the grid as one snaking path with border connectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerpentinePlanner {
    /// How blank cells are crossed.
    pub gap_policy: GapPolicy,
}

impl SerpentinePlanner {
    /// Create a planner with the given gap policy.
    #[must_use]
    pub const fn new(gap_policy: GapPolicy) -> Self {
        Self { gap_policy }
    }
}

/// Accumulates commands while tracking the pen position.
struct Pen {
    commands: Vec<StrokeCommand>,
    at: Point,
    policy: GapPolicy,
}

impl Pen {
    fn start(at: Point, policy: GapPolicy, capacity: usize) -> Self {
        let mut commands = Vec::with_capacity(capacity);
        commands.push(StrokeCommand::MoveTo(at));
        Self {
            commands,
            at,
            policy,
        }
    }

    /// Draw unconditionally.
    fn draw(&mut self, to: Point) {
        self.commands.push(StrokeCommand::DrawTo(to));
        self.at = to;
    }

    /// Travel across possibly blank cells: drawn under `Bridge`, lifted
    /// under `Lift` unless the pen is already there.
    fn travel(&mut self, to: Point) {
        match self.policy {
            GapPolicy::Bridge => self.draw(to),
            GapPolicy::Lift if self.at == to => {}
            GapPolicy::Lift => {
                self.commands.push(StrokeCommand::MoveTo(to));
                self.at = to;
            }
        }
    }
}

impl StrokePlanner for SerpentinePlanner {
    fn plan(&self, grid: &PixelGrid, mapper: &CellMapper) -> Vec<StrokeCommand> {
        let (width, height) = (grid.width(), grid.height());
        let half_cell = mapper.cell_height() / 2.0;
        // Corner mapping shifted down half a cell onto the row's midline.
        let mid = |col: usize, row: usize| {
            let p = mapper.map(col, row);
            Point::new(p.x, p.y - half_cell)
        };

        let capacity = 1 + grid.ink_count() * 2 + height.saturating_sub(1) * 2;
        let mut pen = Pen::start(mid(0, 0), self.gap_policy, capacity);

        for (row, cells) in grid.rows().enumerate() {
            let left_to_right = row % 2 == 0;

            if left_to_right {
                for col in (0..width).filter(|&c| cells[c]) {
                    pen.travel(mid(col, row));
                    pen.draw(mid(col + 1, row));
                }
            } else {
                for col in (0..width).rev().filter(|&c| cells[c]) {
                    pen.travel(mid(col + 1, row));
                    pen.draw(mid(col, row));
                }
            }

            if row + 1 < height {
                let border = if left_to_right { width } else { 0 };
                pen.travel(mid(border, row));
                pen.draw(mid(border, row + 1));
            }
        }

        pen.commands
    }
}
