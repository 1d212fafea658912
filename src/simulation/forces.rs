//! Force / acceleration contributors for the engine
//!
//! Defines the acceleration trait, the summing `AccelSet`, and direct
//! Newtonian gravity in physical units over scene-unit positions

use crate::simulation::pairs::ordered_pairs;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - `sys` is only read
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        debug_assert_eq!(out.len(), sys.bodies.len());
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }

    /// Allocating form of [`AccelSet::accumulate_accels`]
    pub fn accels(&self, sys: &System) -> Vec<NVec2> {
        let mut out = vec![NVec2::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys, &mut out);
        out
    }
}

/// Acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body,
/// in scene units per second squared
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity with additive softening
///
/// Separations are converted to metres before the inverse square and the
/// result is converted back to scene units. Every ordered pair is evaluated
/// on its own, the i->j and j->i terms are not shared.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub metres_per_unit: f64, // scene unit -> metres
    pub eps2: f64, // softening, m^2
}

impl NewtonianGravity {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            G: p.G,
            metres_per_unit: p.metres_per_unit,
            eps2: p.eps2,
        }
    }

    /// Acceleration on a body at `xi` from a mass `mj` at `xj`, scene units
    pub fn pull(&self, xi: NVec2, xj: NVec2, mj: f64) -> NVec2 {
        // displacement i -> j in metres
        let r = (xj - xi) * self.metres_per_unit;
        let dist = r.norm();
        if dist == 0.0 {
            // coincident centres: no direction to pull along
            return NVec2::zeros();
        }

        // a = G m_j / (r^2 + eps), along r_hat
        let a = self.G * mj / (dist * dist + self.eps2);
        (r / dist) * a / self.metres_per_unit
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        for (i, j) in ordered_pairs(sys.bodies.len()) {
            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];
            out[i] += self.pull(bi.x, bj.x, bj.m);
        }
    }
}
