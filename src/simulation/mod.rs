pub mod states;
pub mod pairs;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod well;
pub mod scenario;
