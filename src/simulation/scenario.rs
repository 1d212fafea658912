//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - well visualization constants (`WellField`)
//!
//! `Scenario::step` is the per-tick orchestrator. A renderer reads
//! `scenario.system` between calls.

use log::{debug, info, trace};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::configuration::error::Result;
use crate::simulation::collision::{resolve_body_collisions, resolve_boundaries, Bounds};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::well::{HeightField, WellField};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize, // overlapping body pairs corrected
    pub wall_hits: usize, // bodies clamped to a wall
}

/// Fully-initialized runtime bundle built from a [`ScenarioConfig`]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub well: WellField,
}

impl Scenario {
    /// Validate `cfg` and map it into runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`, z components dropped
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: if bc.v.is_empty() { NVec2::zeros() } else { NVec2::new(bc.v[0], bc.v[1]) },
            m: bc.m,
            radius: bc.radius,
        }).collect();

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            metres_per_unit: p_cfg.metres_per_unit,
            eps2: p_cfg.eps2,
            restitution: p_cfg.restitution,
            h0: p_cfg.h0,
            time_scale: p_cfg.time_scale,
            max_frame_dt: p_cfg.max_frame_dt,
            ticks: p_cfg.ticks,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            collisions: cfg.engine.collisions,
            bounds: cfg.engine.bounds.map(|[w, h]| Bounds::new(w, h)),
        };

        let well = WellField::new(cfg.well.g_scale, cfg.well.max_dip);

        let scenario = Self::new(bodies, parameters, engine).with_well(well);
        info!(
            "built scenario: {} bodies, collisions {}, bounds {:?}",
            scenario.system.len(),
            scenario.engine.collisions,
            scenario.engine.bounds
        );
        Ok(scenario)
    }

    /// Scenario over already-valid bodies, gravity registered from `parameters`
    pub fn new(bodies: Vec<Body>, parameters: Parameters, engine: Engine) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity::from_params(&parameters));

        Self {
            engine,
            parameters,
            system: System::new(bodies),
            forces,
            well: WellField::default(),
        }
    }

    pub fn with_well(mut self, well: WellField) -> Self {
        self.well = well;
        self
    }

    /// Advance one tick of `dt` simulated seconds:
    /// gravity -> integrate -> body collisions -> walls
    pub fn step(&mut self, dt: f64) -> StepReport {
        euler_integrator(&mut self.system, &self.forces, dt);

        let restitution = self.parameters.restitution;
        let mut report = StepReport::default();

        if self.engine.collisions {
            report.contacts = resolve_body_collisions(&mut self.system.bodies, restitution);
        }
        if let Some(bounds) = &self.engine.bounds {
            report.wall_hits = resolve_boundaries(&mut self.system.bodies, bounds, restitution);
        }

        if report.contacts > 0 || report.wall_hits > 0 {
            debug!(
                "t = {:.3e}: {} contacts, {} wall hits",
                self.system.t, report.contacts, report.wall_hits
            );
        } else {
            trace!("t = {:.3e}: step dt = {:.3e}", self.system.t, dt);
        }
        report
    }

    /// Step by a real frame time, clamped and scaled by the parameters
    pub fn frame(&mut self, real_dt: f64) -> StepReport {
        let dt = self.parameters.scaled_dt(real_dt);
        self.step(dt)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Well depth at `(x, y)` for the current body state
    pub fn well_depth(&self, x: f64, y: f64) -> f64 {
        self.well.depth(&self.system.bodies, x, y)
    }

    pub fn sample_well(&self, center: NVec2, half_extent: f64, lines: usize) -> HeightField {
        self.well.sample_grid(&self.system.bodies, center, half_extent, lines)
    }
}
