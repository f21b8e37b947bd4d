//! Spawn placement.
//!
//! Positions draw from the seeded stream and reject anything that leaves
//! the boundary, overlaps static geometry, or intrudes on a reserved
//! no-spawn circle.

use collision_world::Environment;
use glam::{vec2, Vec2};
use std::f32::consts::TAU;

use crate::rng::SimRng;

/// A position is blocked when its circle leaves bounds, touches solid
/// geometry, or overlaps a reserved circle.
pub fn position_blocked(
    env: &Environment,
    p: Vec2,
    radius: f32,
    reserved: &[(Vec2, f32)],
) -> bool {
    if !env.is_inside_bounds(p, radius) || env.circle_hits_any(p, radius) {
        return true;
    }
    reserved
        .iter()
        .any(|&(c, r)| (p - c).length_squared() < (r + radius) * (r + radius))
}

/// Uniform rejection sampling over the playable area. `None` after the
/// attempt budget runs dry; callers decide whether that is fatal.
pub fn find_clear_position(
    env: &Environment,
    rng: &mut SimRng,
    radius: f32,
    reserved: &[(Vec2, f32)],
    attempts: usize,
) -> Option<Vec2> {
    let lim = (env.bounds.half_extents() - Vec2::splat(radius)).max(Vec2::ZERO);
    for _ in 0..attempts.max(1) {
        let p = vec2(rng.range_f32(-lim.x, lim.x), rng.range_f32(-lim.y, lim.y));
        if !position_blocked(env, p, radius, reserved) {
            return Some(p);
        }
    }
    None
}

/// A clear position near `center`, drawn from a jitter disc, falling back
/// to anywhere-clear when the neighborhood is packed.
pub fn find_position_near(
    env: &Environment,
    rng: &mut SimRng,
    center: Vec2,
    spread: f32,
    radius: f32,
    reserved: &[(Vec2, f32)],
    attempts: usize,
) -> Option<Vec2> {
    for _ in 0..attempts.max(1) {
        let ang = rng.range_f32(0.0, TAU);
        let dist = rng.range_f32(0.0, spread.max(0.0));
        let p = center + vec2(ang.cos(), ang.sin()) * dist;
        if !position_blocked(env, p, radius, reserved) {
            return Some(p);
        }
    }
    find_clear_position(env, rng, radius, reserved, attempts)
}
