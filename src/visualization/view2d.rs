use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;
use bevy_egui::{
    egui::{self, Slider},
    EguiContexts, EguiPlugin,
};

use crate::field::grid::{Domain, SampleGrid, DISPLACEMENT_SCALE};
use crate::field::sources::PointMass;
use crate::field::state::{apply_event, NVec2, ViewEvent, ViewState};

/// Component tagging the source marker entity
#[derive(Component)]
struct SourceMarker;

/// Data-space → screen-space scaling factor for positions
const SCALE: f32 = 30.0;

/// Screen radius of the marker per unit of marker size
const MARKER_UNIT: f32 = 2.0;

/// Cached polylines from the last lattice rebuild, in data coordinates
///
/// Fully replaced whenever [`ViewState`] changes; the draw systems below
/// only read it. Columns are the undistorted reference lines, rows are
/// the lines bent along the field
#[derive(Resource, Default)]
pub struct FieldLattice {
    pub columns: Vec<Vec<NVec2>>, // undistorted vertical lines
    pub rows: Vec<Vec<NVec2>>, // distorted horizontal lines
}

impl FieldLattice {
    fn build(state: &ViewState) -> Self {
        let grid = SampleGrid::new(Domain::default(), state.grid_density);
        let source = PointMass {
            position: state.source,
            mass: state.mass,
        };

        Self {
            columns: grid.columns(),
            rows: grid.displaced_rows(&source, DISPLACEMENT_SCALE),
        }
    }
}

/// Entrypoint: run the interactive viewer until the window is closed
pub fn run_view(view: ViewState) {
    println!(
        "run_view: starting Bevy 2D viewer with a {}x{} lattice",
        view.grid_density, view.grid_density
    );

    App::new()
        .insert_resource(view)
        .init_resource::<FieldLattice>()
        .add_event::<ViewEvent>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravitational Field Lines".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(EguiPlugin)
        .add_systems(Startup, setup_view_system)
        .add_systems(
            Update,
            (
                control_panel_system,
                drag_source_system,
                apply_view_events_system,
                rebuild_lattice_system,
                draw_lattice_system,
                sync_marker_system,
            )
                .chain(),
        )
        .run();
}

/// Startup system: spawn the 2D camera and the source marker
fn setup_view_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    view: Res<ViewState>,
) {
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            ..Default::default()
        },
        ..Default::default()
    });

    let x = view.source.x as f32 * SCALE;
    let y = view.source.y as f32 * SCALE;

    // Marker above the lattice lines; size and color track the state
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_UNIT))),
            material: materials.add(ColorMaterial::from(view.marker_color)),
            transform: Transform::from_xyz(x, y, 1.0)
                .with_scale(Vec3::splat(view.marker_size as f32)),
            ..Default::default()
        },
        SourceMarker,
    ));
}

/// Widget panel: three sliders and a color button
///
/// Widgets edit local copies and emit a [`ViewEvent`] on change, so the
/// state itself is only ever written by `apply_view_events_system`. A
/// color pick dismissed without a change emits nothing
fn control_panel_system(
    mut contexts: EguiContexts,
    view: Res<ViewState>,
    mut events: EventWriter<ViewEvent>,
) {
    let mut mass = view.mass;
    let mut marker_size = view.marker_size;
    let mut density = view.grid_density as f64;
    let mut color = color_to_egui(view.marker_color);

    egui::Window::new("Controls")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            if ui.add(Slider::new(&mut mass, 0.1..=5.0).text("Mass")).changed() {
                events.send(ViewEvent::SetMass(mass));
            }
            if ui
                .add(Slider::new(&mut marker_size, 1.0..=10.0).text("Object Size"))
                .changed()
            {
                events.send(ViewEvent::SetMarkerSize(marker_size));
            }
            if ui
                .add(
                    Slider::new(&mut density, 10.0..=50.0)
                        .step_by(1.0)
                        .text("Grid Density"),
                )
                .changed()
            {
                events.send(ViewEvent::SetGridDensity(density));
            }

            ui.horizontal(|ui| {
                ui.label("Object Color");
                if ui.color_edit_button_srgba(&mut color).changed() {
                    events.send(ViewEvent::SetMarkerColor(egui_to_color(color)));
                }
            });
        });
}

/// Pointer handler: dragging with the primary button repositions the mass
///
/// Only cursor positions that map into the domain count; drags over the
/// widget panel belong to the widgets. There is no pan/zoom camera, so a
/// drag on the plot always moves the mass
fn drag_source_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    mut events: EventWriter<ViewEvent>,
) {
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let p = NVec2::new((world.x / SCALE) as f64, (world.y / SCALE) as f64);
    if !Domain::default().contains(p) {
        return;
    }

    events.send(ViewEvent::MoveSource(p));
}

/// Drain this frame's input events into the display state, in order
fn apply_view_events_system(mut events: EventReader<ViewEvent>, mut state: ResMut<ViewState>) {
    for event in events.read() {
        apply_event(&mut state, event);
    }
}

/// Rebuild the lattice cache when (and only when) the state changed
fn rebuild_lattice_system(state: Res<ViewState>, mut lattice: ResMut<FieldLattice>) {
    if !state.is_changed() {
        return;
    }
    *lattice = FieldLattice::build(&state);
}

/// Per-frame draw of the lattice polylines, frame, and axes
fn draw_lattice_system(mut gizmos: Gizmos, lattice: Res<FieldLattice>) {
    // Undistorted columns underneath, displaced rows on top
    for line in &lattice.columns {
        gizmos.linestrip_2d(line.iter().map(to_screen), Color::srgb(0.8, 0.8, 0.8));
    }
    for line in &lattice.rows {
        gizmos.linestrip_2d(line.iter().map(to_screen), Color::BLACK);
    }

    draw_frame(&mut gizmos);
}

/// Keep the marker entity in sync with the display state
fn sync_marker_system(
    view: Res<ViewState>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&mut Transform, &Handle<ColorMaterial>), With<SourceMarker>>,
) {
    for (mut transform, mat_handle) in &mut query {
        transform.translation.x = view.source.x as f32 * SCALE;
        transform.translation.y = view.source.y as f32 * SCALE;
        transform.scale = Vec3::splat(view.marker_size as f32);

        if let Some(mat) = materials.get_mut(mat_handle) {
            mat.color = view.marker_color;
        }
    }
}

// =========================================================================================
// Draw the fixed domain frame and axes for visual reference
// =========================================================================================

fn draw_frame(gizmos: &mut Gizmos) {
    let domain = Domain::default();
    let min = domain.min as f32 * SCALE;
    let max = domain.max as f32 * SCALE;

    // Domain frame, the display bounds never move
    let corners = [
        Vec2::new(min, min),
        Vec2::new(max, min),
        Vec2::new(max, max),
        Vec2::new(min, max),
        Vec2::new(min, min),
    ];
    gizmos.linestrip_2d(corners, Color::srgb(0.3, 0.3, 0.3));

    // x axis: muted red, y axis: muted green
    gizmos.line_2d(
        Vec2::new(min, 0.0),
        Vec2::new(max, 0.0),
        Color::srgb(0.6, 0.2, 0.2),
    );
    gizmos.line_2d(
        Vec2::new(0.0, min),
        Vec2::new(0.0, max),
        Color::srgb(0.2, 0.6, 0.2),
    );
}

// =========================================================================================
// Color conversions between the display state and the egui picker
// =========================================================================================

fn color_to_egui(color: Color) -> egui::Color32 {
    let c = color.to_srgba();
    egui::Color32::from_rgb(
        (c.red * 255.0) as u8,
        (c.green * 255.0) as u8,
        (c.blue * 255.0) as u8,
    )
}

fn egui_to_color(color: egui::Color32) -> Color {
    Color::srgb_u8(color.r(), color.g(), color.b())
}

fn to_screen(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)
}
