//! Integration test: planner invariants over a spread of generated grids.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use etch_pipeline::{
    CellMapper, GapPolicy, PixelGrid, PlanStats, PlannerKind, Point, SegmentPlanner,
    SerpentinePlanner, StrokeCommand, StrokePlanner, runs,
};

/// Deterministic xorshift so every run checks the same grids.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

fn generated_grids() -> Vec<PixelGrid> {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    let mut grids = Vec::new();
    for (width, height, density) in [(1, 1, 2), (7, 3, 2), (16, 9, 3), (31, 17, 5), (5, 40, 1)] {
        let rows: Vec<Vec<bool>> = (0..height)
            .map(|_| (0..width).map(|_| rng.next() % density == 0).collect())
            .collect();
        grids.push(PixelGrid::from_rows(&rows).unwrap());
    }
    grids
}

fn mapper() -> CellMapper {
    CellMapper::new(2.5, 4.0, Point::new(-20.0, 30.0)).unwrap()
}

#[test]
fn segment_moves_equal_run_count() {
    let m = mapper();
    for grid in generated_grids() {
        let stats = PlanStats::measure(&SegmentPlanner.plan(&grid, &m));
        assert_eq!(stats.moves, runs(&grid).len());
        assert_eq!(stats.draws, stats.moves);
    }
}

#[test]
fn segment_strokes_cover_ink_length() {
    let m = mapper();
    for grid in generated_grids() {
        let stats = PlanStats::measure(&SegmentPlanner.plan(&grid, &m));
        #[allow(clippy::cast_precision_loss)]
        let expected = grid.ink_count() as f64 * m.cell_width();
        assert!(
            (stats.drawn_length - expected).abs() < 1e-9,
            "drawn {} vs ink width {expected}",
            stats.drawn_length
        );
    }
}

#[test]
fn planners_are_deterministic() {
    let m = mapper();
    for grid in generated_grids() {
        for kind in [
            PlannerKind::Segments,
            PlannerKind::serpentine(),
            PlannerKind::Serpentine {
                gap_policy: GapPolicy::Lift,
            },
        ] {
            assert_eq!(kind.plan(&grid, &m), kind.plan(&grid, &m));
        }
    }
}

#[test]
fn bridged_serpentine_is_one_path() {
    let m = mapper();
    for grid in generated_grids() {
        let commands = SerpentinePlanner::default().plan(&grid, &m);
        assert!(matches!(commands.first(), Some(StrokeCommand::MoveTo(_))));
        assert!(commands.iter().skip(1).all(|c| c.is_draw()));
    }
}

#[test]
fn lifted_serpentine_draws_only_ink_and_connectors() {
    let m = mapper();
    for grid in generated_grids() {
        let stats = PlanStats::measure(&SerpentinePlanner::new(GapPolicy::Lift).plan(&grid, &m));
        #[allow(clippy::cast_precision_loss)]
        let expected = (grid.ink_count() as f64).mul_add(
            m.cell_width(),
            (grid.height() - 1) as f64 * m.cell_height(),
        );
        assert!(
            (stats.drawn_length - expected).abs() < 1e-9,
            "drawn {} vs expected {expected}",
            stats.drawn_length
        );
    }
}

#[test]
fn all_white_grid() {
    let grid = PixelGrid::from_rows(&vec![vec![false; 12]; 6]).unwrap();
    let m = mapper();
    assert!(SegmentPlanner.plan(&grid, &m).is_empty());

    let serpentine = SerpentinePlanner::default().plan(&grid, &m);
    assert_eq!(serpentine.len(), 1 + 2 * 5);
}
