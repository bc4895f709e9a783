//! A surface that remembers what it was asked to draw.

use etch_pipeline::Point;

use crate::DrawingSurface;

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    /// [`DrawingSurface::move_to`].
    MoveTo(Point),
    /// [`DrawingSurface::line_to`].
    LineTo(Point),
}

/// Records surface calls in order, for headless checks of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    calls: Vec<SurfaceCall>,
}

impl Recorder {
    /// Calls received so far.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Number of pen lifts received.
    #[must_use]
    pub fn lifts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::MoveTo(_)))
            .count()
    }
}

impl DrawingSurface for Recorder {
    fn move_to(&mut self, to: Point) {
        self.calls.push(SurfaceCall::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.calls.push(SurfaceCall::LineTo(to));
    }
}
