//! Summary metrics for a planned stroke sequence.
//!
//! Used by the CLI report and logs to compare strategies: how often the
//! pen lifts, and how far it travels drawing versus repositioning.

use serde::{Deserialize, Serialize};

use crate::types::{Point, StrokeCommand};

/// Counts and travel lengths of a command sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Number of [`StrokeCommand::MoveTo`] commands (pen lifts).
    pub moves: usize,
    /// Number of [`StrokeCommand::DrawTo`] commands.
    pub draws: usize,
    /// Total length drawn with the pen down, in surface units.
    pub drawn_length: f64,
    /// Total length travelled with the pen up, not counting the first
    /// positioning move.
    pub travel_length: f64,
}

impl PlanStats {
    /// Measure a command sequence.
    ///
    /// A `DrawTo` before any `MoveTo` has no known start and contributes
    /// no length.
    #[must_use]
    pub fn measure(commands: &[StrokeCommand]) -> Self {
        let mut stats = Self::default();
        let mut at: Option<Point> = None;

        for &command in commands {
            let to = command.point();
            let step = at.map_or(0.0, |from| from.distance(to));
            match command {
                StrokeCommand::MoveTo(_) => {
                    stats.moves += 1;
                    stats.travel_length += step;
                }
                StrokeCommand::DrawTo(_) => {
                    stats.draws += 1;
                    stats.drawn_length += step;
                }
            }
            at = Some(to);
        }
        stats
    }

    /// Total number of commands.
    #[must_use]
    pub const fn commands(&self) -> usize {
        self.moves + self.draws
    }
}
