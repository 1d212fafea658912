pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{semi_implicit_euler, euler_integrator};
pub use simulation::collision::{Bounds, Contact, resolve_pair, resolve_body_collisions, resolve_boundary, resolve_boundaries};
pub use simulation::well::{WellField, HeightField};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, StepReport};

pub use configuration::config::{EngineConfig, ParametersConfig, WellConfig, BodyConfig, ScenarioConfig};
pub use configuration::error::ConfigError;
