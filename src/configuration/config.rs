//! Configuration types for loading view presets from YAML
//!
//! This module defines a thin, `serde`-deserializable representation of
//! the initial display state. A preset consists of:
//!
//! - [`DisplayConfig`] – initial values for every display parameter
//! - [`ViewConfig`]    – top-level wrapper used to load a preset from YAML
//!
//! # YAML format
//! An example preset matching these types:
//!
//! ```yaml
//! display:
//!   source: [ 0.0, 0.0 ]             # mass position in data coordinates
//!   mass: 1.0                        # mass magnitude
//!   marker_size: 5.0                 # marker scale
//!   grid_density: 20                 # lattice samples per axis
//!   marker_color: [ 1.0, 0.0, 0.0 ]  # marker fill, rgb in 0..1
//! ```
//!
//! The viewer maps this configuration into its runtime state record at
//! startup; nothing is ever written back

use serde::Deserialize;

/// Initial values for every display parameter
#[derive(Deserialize, Debug)]
pub struct DisplayConfig {
    pub source: Vec<f64>, // mass position [x, y] in data coordinates
    pub mass: f64, // mass magnitude
    pub marker_size: f64, // marker scale, display only
    pub grid_density: usize, // lattice samples per axis
    pub marker_color: Vec<f32>, // marker fill as [r, g, b] in 0..1
}

/// Top-level preset loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ViewConfig {
    pub display: DisplayConfig, // initial display state
}
