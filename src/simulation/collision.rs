//! Collision response: body-body and body-wall
//!
//! Both passes are purely positional + velocity corrections applied in
//! place. Detection is discrete: a step large enough to carry a body through
//! another body or a wall is not caught (no swept tests).

use super::pairs::{pair_mut, unordered_pairs};
use super::states::{Body, NVec2};

/// Rectangular scene bounds `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Outcome of [`resolve_pair`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Not overlapping, untouched
    Separate,
    /// Overlap removed, bodies already moving apart so no impulse
    Separated,
    /// Overlap removed and a restitution impulse applied
    Bounced,
}

/// Resolve one pair of bodies.
///
/// If the spheres overlap they are pushed apart along the normal by half the
/// overlap each, regardless of mass. If they are closing along the normal an
/// equal-mass impulse `j = -(1 + e) vAlong / 2` is applied, which leaves the
/// normal relative velocity at `-e` times its old value. Tangential velocity
/// is never touched.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) -> Contact {
    // normal from b to a
    let d = a.x - b.x;
    let dist2 = d.norm_squared();
    let r_sum = a.radius + b.radius;

    if dist2 >= r_sum * r_sum {
        return Contact::Separate;
    }

    let mut dist = dist2.sqrt();
    let n = if dist == 0.0 {
        // coincident centres, any axis works as the normal
        dist = 0.5 * r_sum;
        NVec2::new(1.0, 0.0)
    } else {
        d / dist
    };

    // push apart, half the overlap each
    let half = 0.5 * (r_sum - dist);
    a.x += n * half;
    b.x -= n * half;

    let v_along = (a.v - b.v).dot(&n);
    if v_along >= 0.0 {
        return Contact::Separated;
    }

    let j = -(1.0 + restitution) * v_along / 2.0;
    a.v += n * j;
    b.v -= n * j;
    Contact::Bounced
}

/// Run [`resolve_pair`] over every unordered pair `i < j`, in index order.
/// Returns the number of overlapping pairs found.
pub fn resolve_body_collisions(bodies: &mut [Body], restitution: f64) -> usize {
    let mut contacts = 0;
    for (i, j) in unordered_pairs(bodies.len()) {
        let (a, b) = pair_mut(bodies, i, j);
        if resolve_pair(a, b, restitution) != Contact::Separate {
            contacts += 1;
        }
    }
    contacts
}

/// Keep one body inside `bounds`.
///
/// Each of the four walls is checked on its own with a strict inequality:
/// a crossing body is clamped to the wall offset by its radius and its
/// perpendicular velocity is reflected and scaled by `restitution`.
/// Returns true if any wall was hit.
pub fn resolve_boundary(body: &mut Body, bounds: &Bounds, restitution: f64) -> bool {
    let r = body.radius;
    let mut hit = false;

    // left
    if body.x.x < r {
        body.x.x = r;
        body.v.x *= -restitution;
        hit = true;
    }
    // right
    if body.x.x > bounds.width - r {
        body.x.x = bounds.width - r;
        body.v.x *= -restitution;
        hit = true;
    }
    // bottom
    if body.x.y < r {
        body.x.y = r;
        body.v.y *= -restitution;
        hit = true;
    }
    // top
    if body.x.y > bounds.height - r {
        body.x.y = bounds.height - r;
        body.v.y *= -restitution;
        hit = true;
    }

    hit
}

/// Apply [`resolve_boundary`] to every body, returns how many hit a wall
pub fn resolve_boundaries(bodies: &mut [Body], bounds: &Bounds, restitution: f64) -> usize {
    bodies
        .iter_mut()
        .map(|b| resolve_boundary(b, bounds, restitution))
        .filter(|&hit| hit)
        .count()
}
