//! High-level runtime engine settings
//!
//! Selects which correction passes run after integration

use super::collision::Bounds;

#[derive(Debug, Clone)]
pub struct Engine {
    pub collisions: bool, // false = bodies pass through each other
    pub bounds: Option<Bounds>, // None = unbounded scene
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            collisions: true,
            bounds: None,
        }
    }
}
