//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant, scene-unit scale and softening (`G`, `metres_per_unit`, `eps2`),
//! - restitution used by body and wall collisions,
//! - frame clock settings for the caller (`h0`, `time_scale`, `max_frame_dt`, `ticks`)
//!
//! Values are read-only once a `Scenario` is built.

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.6743e-11;
/// One scene unit ("pixel") is a thousand kilometres
pub const METRES_PER_UNIT: f64 = 1.0e6;
/// Softening added to r^2, in m^2
pub const SOFTENING_EPS2: f64 = 1.0e-6;
/// Fraction of the normal closing speed kept after a bounce
pub const RESTITUTION: f64 = 0.95;
/// One real second is a simulated week
pub const TIME_SCALE: f64 = 7.0 * 86_400.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub metres_per_unit: f64, // scene unit -> metres
    pub eps2: f64, // softening, m^2
    pub restitution: f64, // body-body and body-wall restitution
    pub h0: f64, // real seconds per frame for headless runs
    pub time_scale: f64, // simulated seconds per real second
    pub max_frame_dt: f64, // largest real frame time accepted by the caller
    pub ticks: usize, // frames to run headless
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            metres_per_unit: METRES_PER_UNIT,
            eps2: SOFTENING_EPS2,
            restitution: RESTITUTION,
            h0: 1.0 / 60.0,
            time_scale: TIME_SCALE,
            max_frame_dt: 0.1,
            ticks: 10_000,
        }
    }
}

impl Parameters {
    /// Turn a real frame time into a simulated step.
    ///
    /// The frame time is clamped to `max_frame_dt` first so a stalled clock
    /// cannot produce a huge step. The engine itself never clamps, this is
    /// for callers driving it from a wall clock.
    pub fn scaled_dt(&self, real_dt: f64) -> f64 {
        real_dt.max(0.0).min(self.max_frame_dt) * self.time_scale
    }
}
