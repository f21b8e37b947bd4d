//! geom_core: 2D shape primitives plus the intersection tests shared by the
//! collision world and the simulation systems.
//!
//! Conventions: circle-vs-box overlap is strict (`<`), so exact tangency is a
//! miss; segment clipping is inclusive (`t0 <= t1`), so grazing shots count.

#![forbid(unsafe_code)]

use glam::Vec2;

/// Axis-aligned box stored as center + half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    #[inline]
    pub fn from_size(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            center,
            half: Vec2::new(w * 0.5, h * 0.5),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Oriented box: an axis-aligned box in its own local frame, rotated by
/// `angle` radians (counter-clockwise) around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obb {
    pub center: Vec2,
    pub half: Vec2,
    pub angle: f32,
}

impl Obb {
    #[inline]
    pub fn from_size(center: Vec2, w: f32, h: f32, angle: f32) -> Self {
        Self {
            center,
            half: Vec2::new(w * 0.5, h * 0.5),
            angle,
        }
    }

    /// World point expressed in the box's local frame.
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        Vec2::from_angle(-self.angle).rotate(p - self.center)
    }

    /// Local-frame vector projected back into world space.
    #[inline]
    pub fn to_world_vec(&self, v: Vec2) -> Vec2 {
        Vec2::from_angle(self.angle).rotate(v)
    }
}

/// Strict circle-vs-AABB overlap: clamp the center into the extents and
/// compare squared distance. Tangency does not count as a hit.
#[inline]
pub fn circle_hits_aabb(c: Vec2, r: f32, b: &Aabb) -> bool {
    let nearest = c.clamp(b.min(), b.max());
    (c - nearest).length_squared() < r * r
}

/// Strict circle-vs-OBB overlap: same clamp-and-compare, run in the box's
/// local frame.
#[inline]
pub fn circle_hits_obb(c: Vec2, r: f32, b: &Obb) -> bool {
    let local = b.to_local(c);
    let nearest = local.clamp(-b.half, b.half);
    (local - nearest).length_squared() < r * r
}

/// One Liang-Barsky half-plane clip. Narrows `[t0, t1]`; a parallel segment
/// (`p == 0`) passes only when it already lies inside the half-plane.
#[inline]
fn clip_edge(p: f32, q: f32, t0: &mut f32, t1: &mut f32) -> bool {
    if p == 0.0 {
        return q >= 0.0;
    }
    let r = q / p;
    if p < 0.0 {
        if r > *t1 {
            return false;
        }
        if r > *t0 {
            *t0 = r;
        }
    } else {
        if r < *t0 {
            return false;
        }
        if r < *t1 {
            *t1 = r;
        }
    }
    true
}

fn segment_hits_centered(a: Vec2, b: Vec2, half: Vec2) -> bool {
    let d = b - a;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let ok = clip_edge(-d.x, a.x + half.x, &mut t0, &mut t1)
        && clip_edge(d.x, half.x - a.x, &mut t0, &mut t1)
        && clip_edge(-d.y, a.y + half.y, &mut t0, &mut t1)
        && clip_edge(d.y, half.y - a.y, &mut t0, &mut t1);
    ok && t0 <= t1
}

/// Liang-Barsky segment clip against an axis-aligned box.
#[inline]
pub fn segment_hits_aabb(a: Vec2, b: Vec2, bx: &Aabb) -> bool {
    segment_hits_centered(a - bx.center, b - bx.center, bx.half)
}

/// Oriented variant: both endpoints move into the box's local frame, then
/// the identical clip runs against the symmetric half extents.
#[inline]
pub fn segment_hits_obb(a: Vec2, b: Vec2, bx: &Obb) -> bool {
    segment_hits_centered(bx.to_local(a), bx.to_local(b), bx.half)
}
