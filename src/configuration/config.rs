//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which correction passes run (collisions, walls)
//! - [`ParametersConfig`] – physical constants and the frame clock
//! - [`WellConfig`]       – potential-well visualization constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section except `bodies` may be left out and falls back to defaults:
//!
//! ```yaml
//! engine:
//!   collisions: true
//!   bounds: [800.0, 600.0]  # optional, omit for an open scene
//!
//! parameters:
//!   G: 6.6743e-11           # gravitational constant
//!   metres_per_unit: 1.0e6  # one scene unit in metres
//!   eps2: 1.0e-6            # softening, m^2
//!   restitution: 0.95
//!   h0: 0.016666            # real seconds per headless frame
//!   time_scale: 604800.0    # simulated seconds per real second
//!   max_frame_dt: 0.1       # clamp for real frame time
//!   ticks: 10000
//!
//! well:
//!   g_scale: 1.0e-21
//!   max_dip: 250.0
//!
//! bodies:
//!   - x: [300.0, 300.0]
//!     v: [0.0, 0.00011074]
//!     m: 7.35e22
//!     radius: 15.0
//! ```
//!
//! The config is mapped into runtime types by
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario),
//! which validates it first.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::configuration::error::{ConfigError, Result};
use crate::simulation::params;
use crate::simulation::well;

fn default_true() -> bool {
    true
}

/// Which correction passes run each tick
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub collisions: bool, // resolve body-body overlaps
    #[serde(default)]
    pub bounds: Option<[f64; 2]>, // scene width and height, walls off when absent
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collisions: true,
            bounds: None,
        }
    }
}

/// Physical constants and frame clock
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,               // gravitational constant
    pub metres_per_unit: f64, // scene unit -> metres
    pub eps2: f64,            // softening - prevent singular forces at tiny separations
    pub restitution: f64,     // bounce coefficient
    pub h0: f64,              // real seconds per frame
    pub time_scale: f64,      // simulated seconds per real second
    pub max_frame_dt: f64,    // clamp on real frame time
    pub ticks: usize,         // frames for a headless run
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = params::Parameters::default();
        Self {
            G: p.G,
            metres_per_unit: p.metres_per_unit,
            eps2: p.eps2,
            restitution: p.restitution,
            h0: p.h0,
            time_scale: p.time_scale,
            max_frame_dt: p.max_frame_dt,
            ticks: p.ticks,
        }
    }
}

/// Potential-well constants
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WellConfig {
    pub g_scale: f64,
    pub max_dip: f64,
}

impl Default for WellConfig {
    fn default() -> Self {
        Self {
            g_scale: well::WELL_G_SCALE,
            max_dip: well::MAX_DIP,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position, 2 or 3 components (z ignored)
    #[serde(default)]
    pub v: Vec<f64>, // velocity, 2 or 3 components, at rest when empty
    pub m: f64,      // mass, kg
    pub radius: f64, // collision and visual radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub well: WellConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check every value the runtime relies on
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        self.well.validate()?;

        if let Some([w, h]) = self.engine.bounds {
            if !(w.is_finite() && w > 0.0 && h.is_finite() && h > 0.0) {
                return Err(ConfigError::parameter(
                    "bounds",
                    format!("width and height must be positive, got [{w}, {h}]"),
                ));
            }
        }

        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
            if let Some([w, h]) = self.engine.bounds {
                let diameter = 2.0 * body.radius;
                if diameter > w || diameter > h {
                    return Err(ConfigError::body(
                        index,
                        format!("diameter {diameter} does not fit in bounds [{w}, {h}]"),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(name, format!("must be positive, got {value}")))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::parameter(name, format!("must be >= 0, got {value}")))
    }
}

impl ParametersConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("G", self.G)?;
        positive("metres_per_unit", self.metres_per_unit)?;
        non_negative("eps2", self.eps2)?;
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::parameter(
                "restitution",
                format!("must be in [0, 1], got {}", self.restitution),
            ));
        }
        positive("h0", self.h0)?;
        positive("time_scale", self.time_scale)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        Ok(())
    }
}

impl WellConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("well.g_scale", self.g_scale)?;
        positive("well.max_dip", self.max_dip)
    }
}

impl BodyConfig {
    pub fn validate(&self, index: usize) -> Result<()> {
        check_dimension(index, "x", &self.x)?;
        if !self.v.is_empty() {
            check_dimension(index, "v", &self.v)?;
        }
        if !(self.m.is_finite() && self.m > 0.0) {
            return Err(ConfigError::body(index, format!("mass must be positive, got {}", self.m)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::body(
                index,
                format!("radius must be positive, got {}", self.radius),
            ));
        }
        if self.x.iter().chain(self.v.iter()).any(|c| !c.is_finite()) {
            return Err(ConfigError::body(index, "position and velocity must be finite"));
        }
        Ok(())
    }
}

fn check_dimension(index: usize, field: &'static str, values: &[f64]) -> Result<()> {
    match values.len() {
        2 | 3 => Ok(()),
        len => Err(ConfigError::Dimension { index, field, len }),
    }
}
