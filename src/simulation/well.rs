//! Potential-well height field for visualization
//!
//! `WellField` maps a scene point to a "well depth" built from every body's
//! mass. It uses its own gravity scale and never feeds back into the
//! dynamics, so it can be sampled at any tick from body state alone.

use super::states::{Body, NVec2};

/// Default visual gravity scale, tuned for ~1e22 kg bodies
pub const WELL_G_SCALE: f64 = 1.0e-21;
/// Default depth floor
pub const MAX_DIP: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellField {
    pub g_scale: f64, // visual-only gravity scale
    pub max_dip: f64, // deepest allowed depth, positive
}

impl Default for WellField {
    fn default() -> Self {
        Self {
            g_scale: WELL_G_SCALE,
            max_dip: MAX_DIP,
        }
    }
}

impl WellField {
    pub fn new(g_scale: f64, max_dip: f64) -> Self {
        Self { g_scale, max_dip }
    }

    /// Depth at `(x, y)`, never below `-max_dip`.
    ///
    /// Each body adds `-g_scale * m / max(r, radius)`; inside a body the
    /// distance is clamped to its radius.
    pub fn depth(&self, bodies: &[Body], x: f64, y: f64) -> f64 {
        let p = NVec2::new(x, y);
        let total: f64 = bodies
            .iter()
            .map(|b| {
                let r = (p - b.x).norm().max(b.radius);
                -self.g_scale * b.m / r
            })
            .sum();
        total.max(-self.max_dip)
    }

    /// Sample a square grid of `(lines + 1)^2` depths centred on `center`
    /// and spanning `half_extent` in each direction.
    pub fn sample_grid(
        &self,
        bodies: &[Body],
        center: NVec2,
        half_extent: f64,
        lines: usize,
    ) -> HeightField {
        let step = if lines == 0 { 0.0 } else { 2.0 * half_extent / lines as f64 };
        let origin = center - NVec2::new(half_extent, half_extent);

        let mut depths = Vec::with_capacity((lines + 1) * (lines + 1));
        for row in 0..=lines {
            let y = origin.y + row as f64 * step;
            for col in 0..=lines {
                let x = origin.x + col as f64 * step;
                depths.push(self.depth(bodies, x, y));
            }
        }

        HeightField { origin, step, lines, depths }
    }
}

/// Row-major grid of depths from [`WellField::sample_grid`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    pub origin: NVec2, // scene position of sample (0, 0)
    pub step: f64, // spacing between samples
    pub lines: usize, // samples per side minus one
    pub depths: Vec<f64>,
}

impl HeightField {
    pub fn side(&self) -> usize {
        self.lines + 1
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row > self.lines || col > self.lines {
            return None;
        }
        self.depths.get(row * self.side() + col).copied()
    }

    /// Scene position of sample `(row, col)`
    pub fn point(&self, row: usize, col: usize) -> NVec2 {
        self.origin + NVec2::new(col as f64 * self.step, row as f64 * self.step)
    }

    pub fn deepest(&self) -> Option<f64> {
        self.depths.iter().copied().reduce(f64::min)
    }
}
