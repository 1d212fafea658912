//! Core state types for the simulation.
//!
//! Defines the body/system structs:
//! - `Body` a sphere mass using `NVec2` (z is never simulated)
//! - `System` the body collection plus the current simulated time `t`
//!
//! The system is owned by the orchestrator (`Scenario`) and is the only
//! mutable state in a run. Renderers only read it between ticks.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position, scene units
    pub v: NVec2, // velocity, scene units per simulated second
    pub m: f64, // mass, kg
    pub radius: f64, // collision + visual radius, scene units
}

impl Body {
    /// `m` and `radius` must be positive. Scenarios built from config are
    /// validated, callers building bodies by hand are not.
    pub fn new(m: f64, radius: f64, x: NVec2, v: NVec2) -> Self {
        debug_assert!(m > 0.0, "body mass must be positive, got {m}");
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self { x, v, m, radius }
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed-size collection of bodies
    pub t: f64, // simulated time
}

impl System {
    /// System at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Sum of m·v over all bodies, in kg · scene units / s
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let m = self.total_mass();
        if self.bodies.is_empty() || m <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.x * b.m);
        Some(weighted / m)
    }

    /// Smallest center-to-center distance over all unordered pairs
    pub fn min_separation(&self) -> Option<f64> {
        crate::simulation::pairs::unordered_pairs(self.bodies.len())
            .map(|(i, j)| self.bodies[i].distance_to(&self.bodies[j]))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))))
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| {
            b.x.iter().chain(b.v.iter()).all(|c| c.is_finite())
        })
    }
}
