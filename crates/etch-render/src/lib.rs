//! etch-render: replay stroke commands against a drawing surface.
//!
//! The pipeline hands over an ordered `Vec<StrokeCommand>`. A renderer
//! walks it front to back, lifting and repositioning the pen for each
//! `MoveTo` and drawing a line for each `DrawTo`. The surface itself is
//! behind the [`DrawingSurface`] trait so the same replay drives a raster
//! [`Canvas`] or a [`Recorder`] in tests.

pub mod canvas;
pub mod color;
pub mod recorder;

use etch_pipeline::{Point, StrokeCommand};

pub use canvas::{Canvas, CanvasError, CanvasStyle};
pub use color::{ColorParseError, Rgb};
pub use recorder::{Recorder, SurfaceCall};

/// Something a pen can move over.
///
/// Coordinates are in surface units with +y pointing up, the convention
/// [`etch_pipeline::CellMapper`] produces.
pub trait DrawingSurface {
    /// Lift the pen and reposition it at `to`.
    fn move_to(&mut self, to: Point);

    /// Draw a straight line from the current position to `to`.
    fn line_to(&mut self, to: Point);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }
}

/// Replay `commands` in order against `surface`.
pub fn replay<S: DrawingSurface + ?Sized>(commands: &[StrokeCommand], surface: &mut S) {
    tracing::debug!(commands = commands.len(), "replaying strokes");
    for &command in commands {
        match command {
            StrokeCommand::MoveTo(p) => surface.move_to(p),
            StrokeCommand::DrawTo(p) => surface.line_to(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_preserves_order_and_kind() {
        let commands = [
            StrokeCommand::MoveTo(Point::new(0.0, 0.0)),
            StrokeCommand::DrawTo(Point::new(1.0, 0.0)),
            StrokeCommand::DrawTo(Point::new(1.0, -1.0)),
            StrokeCommand::MoveTo(Point::new(5.0, 5.0)),
            StrokeCommand::DrawTo(Point::new(6.0, 5.0)),
        ];
        let mut recorder = Recorder::default();
        replay(&commands, &mut recorder);
        assert_eq!(
            recorder.calls(),
            &[
                SurfaceCall::MoveTo(Point::new(0.0, 0.0)),
                SurfaceCall::LineTo(Point::new(1.0, 0.0)),
                SurfaceCall::LineTo(Point::new(1.0, -1.0)),
                SurfaceCall::MoveTo(Point::new(5.0, 5.0)),
                SurfaceCall::LineTo(Point::new(6.0, 5.0)),
            ]
        );
    }

    #[test]
    fn replay_through_trait_object() {
        let mut recorder = Recorder::default();
        {
            let surface: &mut dyn DrawingSurface = &mut recorder;
            replay(&[StrokeCommand::MoveTo(Point::new(2.0, 3.0))], surface);
        }
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn replay_empty_is_noop() {
        let mut recorder = Recorder::default();
        replay(&[], &mut recorder);
        assert!(recorder.calls().is_empty());
    }
}
