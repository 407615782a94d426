//! Core display state for the interactive field view
//!
//! Defines:
//! - `NVec2`      – 2D data-space vector (nalgebra, f64)
//! - `ViewState`  – the single mutable record everything rendered is a function of
//! - `ViewEvent`  – enumerated input events carrying their payloads
//! - `apply_event` – the one routine that writes `ViewState`
//!
//! The state is inserted into Bevy as a `Resource`; widget and pointer
//! systems never write it directly, they emit `ViewEvent`s instead

use bevy::prelude::{Color, Event, Resource};
use nalgebra::Vector2;

use crate::configuration::config::ViewConfig;

pub type NVec2 = Vector2<f64>;

/// The mutable display state of the view
///
/// Everything drawn each frame is a pure function of this record: no
/// hidden history, and no writer other than [`apply_event`]
#[derive(Resource, Debug, Clone)]
pub struct ViewState {
    pub source: NVec2, // mass position in data coordinates
    pub mass: f64, // mass magnitude
    pub marker_size: f64, // marker scale, display only
    pub grid_density: usize, // lattice samples per axis
    pub marker_color: Color, // marker fill, display only
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            source: NVec2::zeros(),
            mass: 1.0,
            marker_size: 5.0,
            grid_density: 20,
            marker_color: Color::srgb(1.0, 0.0, 0.0), // red
        }
    }
}

impl ViewState {
    /// Map a YAML-facing [`ViewConfig`] into the runtime state record
    pub fn build_view(cfg: ViewConfig) -> Self {
        let d = cfg.display;
        Self {
            source: NVec2::new(d.source[0], d.source[1]),
            mass: d.mass,
            marker_size: d.marker_size,
            grid_density: d.grid_density,
            marker_color: Color::srgb(d.marker_color[0], d.marker_color[1], d.marker_color[2]),
        }
    }
}

/// Input events from the widgets and the pointer
///
/// Every input category funnels through this enum so state updates stay
/// in one place and can be exercised without a display toolkit
#[derive(Event, Debug, Clone)]
pub enum ViewEvent {
    SetMass(f64), // mass slider, range 0.1..=5.0
    SetMarkerSize(f64), // marker size slider, range 1.0..=10.0
    SetGridDensity(f64), // density slider, range 10..=50, integer steps
    SetMarkerColor(Color), // confirmed pick from the color button
    MoveSource(NVec2), // pointer drag inside the domain
}

/// Apply one input event to the display state
///
/// Slider payloads are already range-constrained by their widgets, so no
/// further validation happens here; the density value is coerced to an
/// integer
pub fn apply_event(state: &mut ViewState, event: &ViewEvent) {
    match event {
        ViewEvent::SetMass(mass) => state.mass = *mass,
        ViewEvent::SetMarkerSize(size) => state.marker_size = *size,
        ViewEvent::SetGridDensity(density) => state.grid_density = *density as usize,
        ViewEvent::SetMarkerColor(color) => state.marker_color = *color,
        ViewEvent::MoveSource(p) => state.source = *p,
    }
}
