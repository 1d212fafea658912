//! Time integration for the system
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! position drifts with the already-updated velocity. `dt` comes pre-scaled
//! from the caller and may vary between ticks.

use super::forces::AccelSet;
use super::states::{Body, NVec2, System};

/// Advance one body by `dt` under acceleration `a`
/// v_n+1 = v_n + a dt
/// x_n+1 = x_n + v_n+1 dt
pub fn semi_implicit_euler(body: &mut Body, a: NVec2, dt: f64) {
    body.v += a * dt;
    body.x += body.v * dt;
}

/// Advance the whole system by one step of `dt`.
///
/// Accelerations are evaluated once from the positions at the start of the
/// step, then every body is integrated. `sys.t` advances by `dt`.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // a_n for every body from the current state x_n
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        semi_implicit_euler(b, *a, dt);
    }

    sys.t += dt;
}
