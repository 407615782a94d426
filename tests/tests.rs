use gravview::{
    apply_event, Domain, FieldSource, NVec2, PointMass, SampleGrid, ViewConfig, ViewEvent,
    ViewState, DISPLACEMENT_SCALE,
};

use approx::assert_relative_eq;

/// Build a point mass at (`x`, `y`) with magnitude `mass`
pub fn point_mass(x: f64, y: f64, mass: f64) -> PointMass {
    PointMass {
        position: NVec2::new(x, y),
        mass,
    }
}

/// Default display state used as a starting point for event tests
pub fn test_state() -> ViewState {
    ViewState::default()
}

// ==================================================================================
// Field evaluator tests
// ==================================================================================

#[test]
fn force_points_toward_source() {
    let source = point_mass(1.0, -2.0, 3.0);
    let q = NVec2::new(4.0, 2.0);

    let f = source.force_at(q);

    // Displacement from the source to the query point; attraction means
    // the force runs against it
    let disp = q - source.position;
    assert!(disp.dot(&f) < 0.0, "Force is not attractive: {:?}", f);
}

#[test]
fn force_magnitude_is_inverse_square() {
    let source = point_mass(0.0, 0.0, 2.0);
    let q = NVec2::new(3.0, 4.0); // r = 5

    let f = source.force_at(q);

    assert_relative_eq!(f.norm(), source.mass / 25.0, max_relative = 1e-12);
}

#[test]
fn force_at_source_is_exactly_zero() {
    for mass in [0.1, 1.0, 5.0] {
        let source = point_mass(2.0, -2.0, mass);
        let f = source.force_at(source.position);
        assert_eq!(
            f,
            NVec2::zeros(),
            "Nonzero force at the source for mass {mass}"
        );
    }
}

#[test]
fn force_scales_linearly_with_mass() {
    let q = NVec2::new(-3.5, 7.25);

    let f1 = point_mass(1.0, 1.0, 1.3).force_at(q);
    let f2 = point_mass(1.0, 1.0, 2.6).force_at(q);

    assert_relative_eq!(f2.norm(), 2.0 * f1.norm(), max_relative = 1e-12);
}

#[test]
fn force_worked_example() {
    // Source at the origin, unit mass, query at (3, 4): r = 5 and the
    // force comes out to (-3/125, -4/125)
    let source = point_mass(0.0, 0.0, 1.0);

    let f = source.force_at(NVec2::new(3.0, 4.0));

    assert_relative_eq!(f.x, -0.024, max_relative = 1e-12);
    assert_relative_eq!(f.y, -0.032, max_relative = 1e-12);
}

#[test]
fn force_quarter_at_double_distance() {
    let source = point_mass(0.0, 0.0, 1.0);

    let near = source.force_at(NVec2::new(1.0, 0.0));
    let far = source.force_at(NVec2::new(2.0, 0.0));

    let ratio = near.norm() / far.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn sample_fills_one_force_per_point() {
    let source = point_mass(0.0, 0.0, 1.0);
    let points = vec![NVec2::new(1.0, 0.0), NVec2::new(0.0, 2.0), NVec2::zeros()];
    let mut out = vec![NVec2::zeros(); points.len()];

    source.sample(&points, &mut out);

    for (p, f) in points.iter().zip(out.iter()) {
        assert_eq!(*f, source.force_at(*p));
    }
}

// ==================================================================================
// Sample grid tests
// ==================================================================================

#[test]
fn grid_density_gives_square_lattice() {
    let grid = SampleGrid::new(Domain::default(), 20);

    assert_eq!(grid.len(), 400);
    assert_eq!(grid.xs.len(), 20);
    assert_eq!(grid.ys.len(), 20);
}

#[test]
fn density_change_keeps_domain_bounds() {
    for density in [20, 30] {
        let grid = SampleGrid::new(Domain::default(), density);

        assert_eq!(grid.len(), density * density);
        assert_eq!(grid.xs[0], -10.0);
        assert_eq!(*grid.xs.last().unwrap(), 10.0);
        assert_eq!(grid.ys[0], -10.0);
        assert_eq!(*grid.ys.last().unwrap(), 10.0);
    }
}

#[test]
fn columns_are_undistorted_vertical_lines() {
    let grid = SampleGrid::new(Domain::default(), 12);
    let cols = grid.columns();

    assert_eq!(cols.len(), 12);
    for (j, col) in cols.iter().enumerate() {
        assert_eq!(col.len(), 12);
        for p in col {
            assert_eq!(p.x, grid.xs[j]);
        }
    }
}

#[test]
fn displaced_rows_shift_by_scaled_force() {
    let source = point_mass(0.0, 0.0, 1.0);
    let grid = SampleGrid::new(Domain::default(), 21);

    let rows = grid.displaced_rows(&source, DISPLACEMENT_SCALE);
    assert_eq!(rows.len(), 21);

    // Check an arbitrary lattice point against the closed form
    let p = NVec2::new(grid.xs[17], grid.ys[3]);
    let expected = p + DISPLACEMENT_SCALE * source.force_at(p);
    assert_eq!(rows[3][17], expected);
}

#[test]
fn lattice_point_on_source_stays_put() {
    // Density 21 puts a lattice point exactly on the origin
    let source = point_mass(0.0, 0.0, 5.0);
    let grid = SampleGrid::new(Domain::default(), 21);

    let rows = grid.displaced_rows(&source, DISPLACEMENT_SCALE);

    let center = rows[10][10];
    assert_eq!(
        center,
        NVec2::zeros(),
        "Source lattice point moved: {:?}",
        center
    );

    for row in &rows {
        for p in row {
            assert!(
                p.x.is_finite() && p.y.is_finite(),
                "Non-finite lattice point {:?}",
                p
            );
        }
    }
}

#[test]
fn domain_contains_its_bounds() {
    let domain = Domain::default();

    assert!(domain.contains(NVec2::new(-10.0, 10.0)));
    assert!(domain.contains(NVec2::zeros()));
    assert!(!domain.contains(NVec2::new(10.1, 0.0)));
    assert!(!domain.contains(NVec2::new(0.0, -10.1)));
}

// ==================================================================================
// Display state / event tests
// ==================================================================================

#[test]
fn drag_changes_only_the_position() {
    let mut state = test_state();
    let before = state.clone();

    apply_event(&mut state, &ViewEvent::MoveSource(NVec2::new(2.0, -2.0)));
    assert_eq!(state.source, NVec2::new(2.0, -2.0));

    apply_event(&mut state, &ViewEvent::MoveSource(before.source));

    assert_eq!(state.source, before.source);
    assert_eq!(state.mass, before.mass);
    assert_eq!(state.marker_size, before.marker_size);
    assert_eq!(state.grid_density, before.grid_density);
    assert_eq!(state.marker_color, before.marker_color);
}

#[test]
fn density_slider_value_is_coerced_to_integer() {
    let mut state = test_state();

    apply_event(&mut state, &ViewEvent::SetGridDensity(30.9));

    assert_eq!(state.grid_density, 30);
}

#[test]
fn slider_events_write_their_fields() {
    let mut state = test_state();

    apply_event(&mut state, &ViewEvent::SetMass(2.5));
    apply_event(&mut state, &ViewEvent::SetMarkerSize(7.5));

    assert_eq!(state.mass, 2.5);
    assert_eq!(state.marker_size, 7.5);
}

#[test]
fn confirmed_color_pick_replaces_the_color() {
    use bevy::prelude::Color;

    let mut state = test_state();
    let picked = Color::srgb(0.2, 0.4, 0.9);

    apply_event(&mut state, &ViewEvent::SetMarkerColor(picked));

    assert_eq!(state.marker_color, picked);
}

#[test]
fn color_is_untouched_by_other_events() {
    // A dismissed picker emits no event at all, so the color can only
    // change through SetMarkerColor
    let mut state = test_state();
    let color = state.marker_color;

    apply_event(&mut state, &ViewEvent::SetMass(4.2));
    apply_event(&mut state, &ViewEvent::SetMarkerSize(9.0));
    apply_event(&mut state, &ViewEvent::SetGridDensity(44.0));
    apply_event(&mut state, &ViewEvent::MoveSource(NVec2::new(1.0, 1.0)));

    assert_eq!(state.marker_color, color);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn build_view_maps_every_config_field() {
    let yaml = "\
display:
  source: [ 2.0, -3.0 ]
  mass: 4.5
  marker_size: 2.0
  grid_density: 35
  marker_color: [ 0.0, 0.5, 1.0 ]
";
    let cfg: ViewConfig = serde_yaml::from_str(yaml).unwrap();
    let state = ViewState::build_view(cfg);

    assert_eq!(state.source, NVec2::new(2.0, -3.0));
    assert_eq!(state.mass, 4.5);
    assert_eq!(state.marker_size, 2.0);
    assert_eq!(state.grid_density, 35);
}

#[test]
fn default_state_matches_initial_widget_values() {
    let state = ViewState::default();

    assert_eq!(state.source, NVec2::zeros());
    assert_eq!(state.mass, 1.0);
    assert_eq!(state.marker_size, 5.0);
    assert_eq!(state.grid_density, 20);
}
