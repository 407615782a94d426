use std::time::Instant;

use crate::field::grid::{Domain, SampleGrid, DISPLACEMENT_SCALE};
use crate::field::sources::{FieldSource, PointMass};
use crate::field::state::NVec2;

/// Helper to build a source off-center so no lattice point is degenerate
fn make_source() -> PointMass {
    PointMass {
        position: NVec2::new(0.3, -0.7),
        mass: 2.5,
    }
}

pub fn bench_field() {
    // Lattice densities to test, well past the slider range
    let densities = [10, 20, 50, 100, 200, 400];

    for n in densities {
        let grid = SampleGrid::new(Domain::default(), n);
        let points = grid.points();
        let source = make_source();

        let mut out = vec![NVec2::zeros(); points.len()];

        // Warm up
        source.sample(&points, &mut out);

        // Time a full-grid field evaluation
        let t0 = Instant::now();
        source.sample(&points, &mut out);
        let dt_eval = t0.elapsed().as_secs_f64();

        // Time building the displaced rows from scratch
        let t1 = Instant::now();
        let rows = grid.displaced_rows(&source, DISPLACEMENT_SCALE);
        let dt_rows = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:4}, eval = {:8.6} s, rows = {:8.6} s ({} points)",
            dt_eval,
            dt_rows,
            rows.len() * n
        );
    }
}

/// Benchmark the full lattice rebuild across the density slider's range
/// Paste output directly into excel to graph
pub fn bench_rebuild_curve() {
    println!("density,rows_ms,columns_ms");

    for n in (10..=50).step_by(5) {
        // Small lattices are cheap, average over a few rebuilds
        let steps = if n <= 30 { 100 } else { 25 };

        let grid = SampleGrid::new(Domain::default(), n);
        let source = make_source();

        let t0 = Instant::now();
        for _ in 0..steps {
            let _ = grid.displaced_rows(&source, DISPLACEMENT_SCALE);
        }
        let ms_rows = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            let _ = grid.columns();
        }
        let ms_columns = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_rows, ms_columns);
    }
}
