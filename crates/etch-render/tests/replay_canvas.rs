//! Integration test: plan a small grid and replay it onto a canvas.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use etch_pipeline::{CellMapper, Dimensions, GapPolicy, PixelGrid, PlannerKind, StrokePlanner};
use etch_render::{Canvas, CanvasStyle, DrawingSurface, Recorder, Rgb, replay};

const WHITE: Rgb = Rgb(255, 255, 255);

fn style() -> CanvasStyle {
    CanvasStyle {
        background: WHITE,
        pen: Rgb(0, 0, 0),
        line_width: 3.0,
    }
}

/// Diagonal grid on a 100x100 surface: 50x50 cells, no padding.
fn layout() -> (PixelGrid, CellMapper) {
    let grid = PixelGrid::from_rows(&[[true, false], [false, true]]).unwrap();
    let mapper = CellMapper::fit(Dimensions::new(100, 100), 0.0, grid.dimensions()).unwrap();
    (grid, mapper)
}

fn dark(canvas: &Canvas, x: u32, y: u32) -> bool {
    let Rgb(r, g, b) = canvas.pixel(x, y).unwrap();
    r < 64 && g < 64 && b < 64
}

#[test]
fn lifted_serpentine_inks_only_ink_cells_and_border() {
    let (grid, mapper) = layout();
    let planner = PlannerKind::Serpentine {
        gap_policy: GapPolicy::Lift,
    };
    let commands = planner.plan(&grid, &mapper);

    let mut canvas = Canvas::new(Dimensions::new(100, 100), style()).unwrap();
    replay(&commands, &mut canvas);

    // Row 0 runs along y = 25 (pixel), row 1 along y = 75.
    assert!(dark(&canvas, 25, 25), "ink cell (0, 0)");
    assert_eq!(canvas.pixel(75, 25), Some(WHITE), "blank cell (1, 0)");
    assert!(dark(&canvas, 75, 75), "ink cell (1, 1)");
    assert_eq!(canvas.pixel(25, 75), Some(WHITE), "blank cell (0, 1)");
    // Connector down the right border.
    assert!(dark(&canvas, 99, 50), "right border connector");
}

#[test]
fn bridged_serpentine_crosses_gaps() {
    let (grid, mapper) = layout();
    let commands = PlannerKind::serpentine().plan(&grid, &mapper);

    let mut canvas = Canvas::new(Dimensions::new(100, 100), style()).unwrap();
    replay(&commands, &mut canvas);

    assert!(dark(&canvas, 75, 25), "pen stays down across the gap");
}

#[test]
fn canvas_and_recorder_see_the_same_lifts() {
    let (grid, mapper) = layout();
    let commands = PlannerKind::Segments.plan(&grid, &mapper);

    let mut recorder = Recorder::default();
    replay(&commands, &mut recorder);
    assert_eq!(recorder.lifts(), 2);

    let mut canvas = Canvas::new(Dimensions::new(100, 100), style()).unwrap();
    let surface: &mut dyn DrawingSurface = &mut canvas;
    replay(&commands, surface);
    assert_eq!(canvas.lines_drawn(), 2);
}
