//! Force contributors for the gravitational field view
//!
//! Defines the field-source trait and the single point-mass source the
//! view renders. Sources are pure: one force vector per query point,
//! no I/O and no internal state

use crate::field::state::NVec2;

/// Trait for 2D force-field sources evaluated at arbitrary query points
pub trait FieldSource {
    /// Force vector felt at query point `p`
    fn force_at(&self, p: NVec2) -> NVec2;

    /// Evaluate the field for a slice of query points
    /// - `out[i]` will be set to the force at `points[i]`
    fn sample(&self, points: &[NVec2], out: &mut [NVec2]) {
        for (o, p) in out.iter_mut().zip(points.iter()) {
            *o = self.force_at(*p);
        }
    }
}

/// Single attracting point mass
///
/// Inverse-square attraction: direction from the query point toward the
/// source, magnitude `mass / r^2`
pub struct PointMass {
    pub position: NVec2, // source position in data coordinates
    pub mass: f64, // mass magnitude
}

impl FieldSource for PointMass {
    fn force_at(&self, p: NVec2) -> NVec2 {
        // d points from the query point toward the source, so the result
        // is attractive without an extra sign flip
        let d = self.position - p;

        // Squared separation |d|^2
        let r2 = d.dot(&d);

        // At the source itself the force is defined as exactly zero,
        // never a divide-by-zero propagated into the lattice
        if r2 == 0.0 {
            return NVec2::zeros();
        }

        // 1 / |d|
        let inv_r = r2.sqrt().recip();

        // 1 / |d|^3 combines direction and inverse-square magnitude in
        // one step:
        //   f = m * d / |d|^3  =>  |f| = m / |d|^2
        let inv_r3 = inv_r * inv_r * inv_r;

        self.mass * inv_r3 * d
    }
}
