//! Static world geometry: axis-aligned obstacles and oriented hazard boxes.

use geom_core::{Aabb, Obb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,
    Large,
}

/// Axis-aligned obstacle. `temporary` means a special collaborator owns its
/// rendering and removal; the default obstacle path must skip it.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub aabb: Aabb,
    pub kind: ObstacleKind,
    pub temporary: bool,
}

impl Obstacle {
    /// Malformed geometry never collides: non-positive extents or non-finite
    /// coordinates contribute nothing rather than erroring.
    #[inline]
    pub fn collidable(&self) -> bool {
        self.aabb.half.x > 0.0
            && self.aabb.half.y > 0.0
            && self.aabb.center.is_finite()
            && self.aabb.half.is_finite()
    }
}

/// Oriented hazard box placed by an ability or hazard system. `owner` is the
/// placing actor's id; non-`solid` entries are visual-only and are skipped by
/// collision passes (filters can narrow further without removing them).
#[derive(Clone, Copy, Debug)]
pub struct HazardBox {
    pub obb: Obb,
    pub owner: Option<u32>,
    pub solid: bool,
}

impl HazardBox {
    /// Zero-size boxes are legal and simply never intersect.
    #[inline]
    pub fn collidable(&self) -> bool {
        self.obb.half.x > 0.0
            && self.obb.half.y > 0.0
            && self.obb.center.is_finite()
            && self.obb.half.is_finite()
            && self.obb.angle.is_finite()
    }
}
