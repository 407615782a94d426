//! Sample lattice over the fixed display domain
//!
//! Defines the square domain the field is visualized over, the evenly
//! spaced lattice sampled inside it, and the displacement step that
//! bends the lattice along the force field:
//! - `Domain`     – fixed square extent of the view
//! - `SampleGrid` – `density x density` lattice of query points
//! - displaced rows: grid points moved by `DISPLACEMENT_SCALE * force`

use crate::field::sources::FieldSource;
use crate::field::state::NVec2;

/// Scaling factor applied to force vectors before displacing lattice points
pub const DISPLACEMENT_SCALE: f64 = 0.2;

/// Fixed square extent of the view, same range on both axes
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub min: f64, // lower bound on both axes
    pub max: f64, // upper bound on both axes
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}

impl Domain {
    /// Whether `p` lies inside the domain, bounds included
    pub fn contains(&self, p: NVec2) -> bool {
        p.x >= self.min && p.x <= self.max && p.y >= self.min && p.y <= self.max
    }

    /// `n` evenly spaced samples from `min` to `max`, endpoints included
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        if n <= 1 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (n - 1) as f64;
        (0..n).map(|i| self.min + step * i as f64).collect()
    }
}

/// Evenly spaced square lattice of query points over a [`Domain`]
#[derive(Debug, Clone)]
pub struct SampleGrid {
    pub domain: Domain,
    pub xs: Vec<f64>, // sample coordinates along x
    pub ys: Vec<f64>, // sample coordinates along y
}

impl SampleGrid {
    /// Build a `density x density` lattice spanning `domain`
    pub fn new(domain: Domain, density: usize) -> Self {
        Self {
            xs: domain.linspace(density),
            ys: domain.linspace(density),
            domain,
        }
    }

    /// Number of lattice points
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// All lattice points in row-major order (y outer, x inner)
    pub fn points(&self) -> Vec<NVec2> {
        let mut pts = Vec::with_capacity(self.len());
        for &y in &self.ys {
            for &x in &self.xs {
                pts.push(NVec2::new(x, y));
            }
        }
        pts
    }

    /// Undistorted vertical lattice lines, one polyline per x sample
    pub fn columns(&self) -> Vec<Vec<NVec2>> {
        self.xs
            .iter()
            .map(|&x| self.ys.iter().map(|&y| NVec2::new(x, y)).collect())
            .collect()
    }

    /// Horizontal lattice lines bent along the field
    ///
    /// Each lattice point is displaced by `scale * force` evaluated at
    /// that point, one polyline per y sample
    pub fn displaced_rows(&self, field: &dyn FieldSource, scale: f64) -> Vec<Vec<NVec2>> {
        self.ys
            .iter()
            .map(|&y| {
                self.xs
                    .iter()
                    .map(|&x| {
                        let p = NVec2::new(x, y);
                        p + scale * field.force_at(p)
                    })
                    .collect()
            })
            .collect()
    }
}
