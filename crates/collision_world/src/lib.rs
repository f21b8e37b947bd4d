//! collision_world: the static collision world for the arena.
//!
//! Owns the axis-aligned obstacles, oriented hazard boxes, and the playable
//! boundary; exposes swept circle-movement resolution with structured hit
//! records, raycast-style segment queries, and seeded obstacle generation.
//! Dynamic entities are not indexed here; that is the simulation grid's job.

pub mod bounds;
pub mod generate;
pub mod obstacle;
pub mod resolve;

pub use bounds::Bounds;
pub use generate::ObstacleGenConfig;
pub use obstacle::{HazardBox, Obstacle, ObstacleKind};
pub use resolve::{ContactHit, ContactKind, HitVec, MovePhase, MoveResolution};

use geom_core::{circle_hits_aabb, circle_hits_obb, segment_hits_aabb, segment_hits_obb};
use glam::Vec2;

/// The static world: all collision queries and movement resolution go
/// through this. Obstacles are immutable after creation except through the
/// explicit removal entry points below.
#[derive(Clone, Debug)]
pub struct Environment {
    pub bounds: Bounds,
    pub obstacles: Vec<Obstacle>,
    pub hazards: Vec<HazardBox>,
}

impl Environment {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            hazards: Vec::new(),
        }
    }

    /// Build a world with generated obstacles, reproducible from the seed
    /// driving `rng`.
    pub fn with_generated(
        bounds: Bounds,
        cfg: &ObstacleGenConfig,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let mut env = Self::new(bounds);
        env.obstacles = generate::generate_obstacles(cfg, rng);
        env
    }

    /// Pure boundary containment, independent of obstacles.
    #[inline]
    pub fn is_inside_bounds(&self, pos: Vec2, radius: f32) -> bool {
        self.bounds.contains_circle(pos, radius)
    }

    pub fn add_hazard(&mut self, hz: HazardBox) -> usize {
        self.hazards.push(hz);
        self.hazards.len() - 1
    }

    /// Remove every hazard placed by `owner`. Cleanup is scan-by-owner-id,
    /// never pointer-chasing.
    pub fn remove_hazards_owned_by(&mut self, owner: u32) {
        self.hazards.retain(|h| h.owner != Some(owner));
    }

    /// Does a circle overlap any solid geometry?
    #[inline]
    pub fn circle_hits_any(&self, c: Vec2, r: f32) -> bool {
        self.circle_hits_any_filtered(c, r, |_| true)
    }

    /// Filtered variant: `pred` narrows which hazard boxes participate
    /// (e.g. skip self-owned boxes) without removing them from the world.
    pub fn circle_hits_any_filtered<F>(&self, c: Vec2, r: f32, pred: F) -> bool
    where
        F: Fn(&HazardBox) -> bool,
    {
        if self
            .obstacles
            .iter()
            .any(|o| o.collidable() && circle_hits_aabb(c, r, &o.aabb))
        {
            return true;
        }
        self.hazards
            .iter()
            .any(|h| h.solid && h.collidable() && pred(h) && circle_hits_obb(c, r, &h.obb))
    }

    /// Does a segment cross any solid geometry? Short-circuits on the first
    /// hit across obstacles, then hazards.
    #[inline]
    pub fn line_hits_any(&self, a: Vec2, b: Vec2) -> bool {
        self.line_hits_any_filtered(a, b, |_| true)
    }

    pub fn line_hits_any_filtered<F>(&self, a: Vec2, b: Vec2, pred: F) -> bool
    where
        F: Fn(&HazardBox) -> bool,
    {
        if self
            .obstacles
            .iter()
            .any(|o| o.collidable() && segment_hits_aabb(a, b, &o.aabb))
        {
            return true;
        }
        self.hazards
            .iter()
            .any(|h| h.solid && h.collidable() && pred(h) && segment_hits_obb(a, b, &h.obb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom_core::{Aabb, Obb};
    use glam::vec2;

    #[test]
    fn owner_cleanup_removes_only_owned_hazards() {
        let mut env = Environment::new(Bounds::Square { half: 500.0 });
        env.add_hazard(HazardBox {
            obb: Obb::from_size(vec2(0.0, 0.0), 40.0, 40.0, 0.0),
            owner: Some(1),
            solid: true,
        });
        env.add_hazard(HazardBox {
            obb: Obb::from_size(vec2(100.0, 0.0), 40.0, 40.0, 0.0),
            owner: Some(2),
            solid: true,
        });
        env.remove_hazards_owned_by(1);
        assert_eq!(env.hazards.len(), 1);
        assert_eq!(env.hazards[0].owner, Some(2));
    }

    #[test]
    fn filtered_queries_skip_excluded_owners() {
        let mut env = Environment::new(Bounds::Square { half: 500.0 });
        env.add_hazard(HazardBox {
            obb: Obb::from_size(vec2(0.0, 0.0), 40.0, 40.0, 0.0),
            owner: Some(9),
            solid: true,
        });
        assert!(env.circle_hits_any(vec2(0.0, 0.0), 5.0));
        assert!(!env.circle_hits_any_filtered(vec2(0.0, 0.0), 5.0, |h| h.owner != Some(9)));
        assert!(env.line_hits_any(vec2(-100.0, 0.0), vec2(100.0, 0.0)));
        assert!(!env.line_hits_any_filtered(vec2(-100.0, 0.0), vec2(100.0, 0.0), |h| {
            h.owner != Some(9)
        }));
    }

    #[test]
    fn malformed_obstacle_contributes_nothing() {
        let mut env = Environment::new(Bounds::Square { half: 500.0 });
        env.obstacles.push(Obstacle {
            aabb: Aabb::from_size(vec2(0.0, 0.0), -10.0, 40.0),
            kind: ObstacleKind::Small,
            temporary: false,
        });
        assert!(!env.circle_hits_any(vec2(0.0, 0.0), 50.0));
        assert!(!env.line_hits_any(vec2(-100.0, 0.0), vec2(100.0, 0.0)));
        let res = env.resolve_circle_move(vec2(-50.0, 0.0), 10.0, vec2(100.0, 0.0));
        assert_eq!(res.pos, vec2(50.0, 0.0));
    }
}
