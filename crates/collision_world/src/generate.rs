//! Seeded obstacle generation.
//!
//! Deterministic given the RNG's seed: every participant sharing a seed
//! builds an identical world. Candidates intruding on the spawn-safe circle
//! are redrawn, with a bounded attempt budget per obstacle.

use geom_core::{circle_hits_aabb, Aabb};
use glam::{vec2, Vec2};
use rand::Rng;

use crate::obstacle::{Obstacle, ObstacleKind};

#[derive(Clone, Copy, Debug)]
pub struct ObstacleGenConfig {
    pub small_count: usize,
    pub large_count: usize,
    /// Inclusive `[min, max]` edge length for small obstacles.
    pub small_size: [f32; 2],
    pub large_size: [f32; 2],
    /// Centers draw uniformly from `[-placement_half, placement_half]^2`.
    pub placement_half: f32,
    /// No obstacle may overlap this circle around the origin.
    pub spawn_safe_radius: f32,
    pub max_attempts: usize,
}

impl Default for ObstacleGenConfig {
    fn default() -> Self {
        Self {
            small_count: 12,
            large_count: 5,
            small_size: [60.0, 120.0],
            large_size: [180.0, 320.0],
            placement_half: 1900.0,
            spawn_safe_radius: 300.0,
            max_attempts: 32,
        }
    }
}

/// Draw the configured counts of small then large rectangles. Order is part
/// of the deterministic contract; do not interleave.
pub fn generate_obstacles(cfg: &ObstacleGenConfig, rng: &mut impl Rng) -> Vec<Obstacle> {
    let mut out = Vec::with_capacity(cfg.small_count + cfg.large_count);
    place_kind(cfg, rng, ObstacleKind::Small, cfg.small_count, cfg.small_size, &mut out);
    place_kind(cfg, rng, ObstacleKind::Large, cfg.large_count, cfg.large_size, &mut out);
    log::info!(
        "world gen: placed {} obstacles ({} small, {} large)",
        out.len(),
        out.iter().filter(|o| o.kind == ObstacleKind::Small).count(),
        out.iter().filter(|o| o.kind == ObstacleKind::Large).count(),
    );
    out
}

fn place_kind(
    cfg: &ObstacleGenConfig,
    rng: &mut impl Rng,
    kind: ObstacleKind,
    count: usize,
    size: [f32; 2],
    out: &mut Vec<Obstacle>,
) {
    for _ in 0..count {
        let mut placed = false;
        for _ in 0..cfg.max_attempts.max(1) {
            let center = vec2(
                rng.random_range(-cfg.placement_half..=cfg.placement_half),
                rng.random_range(-cfg.placement_half..=cfg.placement_half),
            );
            let w = rng.random_range(size[0]..=size[1]);
            let h = rng.random_range(size[0]..=size[1]);
            let aabb = Aabb::from_size(center, w, h);
            if circle_hits_aabb(Vec2::ZERO, cfg.spawn_safe_radius, &aabb) {
                continue;
            }
            out.push(Obstacle {
                aabb,
                kind,
                temporary: false,
            });
            placed = true;
            break;
        }
        if !placed {
            log::warn!("world gen: gave up placing a {kind:?} obstacle after {} attempts", cfg.max_attempts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_same_world() {
        let cfg = ObstacleGenConfig::default();
        let a = generate_obstacles(&cfg, &mut ChaCha8Rng::seed_from_u64(77));
        let b = generate_obstacles(&cfg, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.aabb, y.aabb);
            assert_eq!(x.kind, y.kind);
        }
    }

    #[test]
    fn spawn_safe_circle_stays_clear() {
        let cfg = ObstacleGenConfig {
            small_count: 40,
            large_count: 10,
            placement_half: 600.0,
            spawn_safe_radius: 250.0,
            ..Default::default()
        };
        let obs = generate_obstacles(&cfg, &mut ChaCha8Rng::seed_from_u64(5));
        for o in &obs {
            assert!(
                !circle_hits_aabb(Vec2::ZERO, cfg.spawn_safe_radius, &o.aabb),
                "obstacle {:?} intrudes on the spawn bubble",
                o.aabb
            );
        }
    }

    #[test]
    fn counts_respected_in_open_space() {
        let cfg = ObstacleGenConfig {
            small_count: 7,
            large_count: 3,
            spawn_safe_radius: 10.0,
            placement_half: 5000.0,
            ..Default::default()
        };
        let obs = generate_obstacles(&cfg, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(obs.len(), 10);
    }
}
