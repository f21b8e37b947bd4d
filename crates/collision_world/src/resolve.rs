//! Swept circle-movement resolution.
//!
//! Movement resolves per axis, sequentially (X then Y). This trades perfect
//! simultaneous-axis correctness for tunnel-free, cheap resolution: on the
//! active axis an obstacle overlap gated by sufficient cross-axis overlap
//! pushes the position back to the near edge; oriented hazard boxes use true
//! penetration push-out in local space, applied only along the active axis.
//! The bounds clamp always runs last.

use glam::Vec2;
use smallvec::SmallVec;

use crate::obstacle::ObstacleKind;
use crate::Environment;

/// Which resolution step produced a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePhase {
    AxisX,
    AxisY,
    Clamp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactKind {
    Obstacle {
        index: usize,
        kind: ObstacleKind,
        temporary: bool,
    },
    Hazard {
        index: usize,
        owner: Option<u32>,
    },
    Boundary,
}

/// One contact recorded during movement resolution. Consumers must treat
/// these as read-only telemetry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactHit {
    pub kind: ContactKind,
    pub phase: MovePhase,
}

/// Hit buffer: inline for the typical contact count, heap only on spill.
pub type HitVec = SmallVec<[ContactHit; 4]>;

/// Result of a resolved move. `hits` stays `None` on the common
/// free-movement path; it is populated on the first contact only.
#[derive(Clone, Debug)]
pub struct MoveResolution {
    pub pos: Vec2,
    pub hits: Option<HitVec>,
}

impl MoveResolution {
    #[inline]
    pub fn hit_any(&self) -> bool {
        self.hits.is_some()
    }

    #[inline]
    pub fn hit_boundary(&self) -> bool {
        self.hits
            .as_deref()
            .is_some_and(|hs| hs.iter().any(|h| h.kind == ContactKind::Boundary))
    }
}

#[inline]
fn record(hits: &mut Option<HitVec>, hit: ContactHit) {
    hits.get_or_insert_with(HitVec::new).push(hit);
}

/// World-space penetration push-out for a circle against an oriented box.
/// Returns `None` when the circle is clear. A center strictly inside the box
/// exits through the nearest face.
fn circle_obb_pushout(c: Vec2, r: f32, bx: &geom_core::Obb) -> Option<Vec2> {
    let local = bx.to_local(c);
    let nearest = local.clamp(-bx.half, bx.half);
    let delta = local - nearest;
    let d2 = delta.length_squared();
    if d2 >= r * r {
        return None;
    }
    let local_push = if d2 > 1e-12 {
        let d = d2.sqrt();
        delta * ((r - d) / d)
    } else {
        let pen = bx.half - local.abs();
        if pen.x <= pen.y {
            Vec2::new((r + pen.x) * local.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, (r + pen.y) * local.y.signum())
        }
    };
    Some(bx.to_world_vec(local_push))
}

impl Environment {
    /// Resolve a circle's attempted displacement against the static world.
    /// Per-axis sequential: X first, then Y, then the bounds clamp.
    pub fn resolve_circle_move(&self, pos: Vec2, radius: f32, delta: Vec2) -> MoveResolution {
        let mut out = MoveResolution { pos, hits: None };

        if delta.x != 0.0 {
            out.pos.x += delta.x;
            self.resolve_axis(&mut out, radius, delta.x, MovePhase::AxisX);
        }
        if delta.y != 0.0 {
            out.pos.y += delta.y;
            self.resolve_axis(&mut out, radius, delta.y, MovePhase::AxisY);
        }

        let (clamped, touched) = self.bounds.clamp_circle(out.pos, radius);
        if touched {
            out.pos = clamped;
            record(
                &mut out.hits,
                ContactHit {
                    kind: ContactKind::Boundary,
                    phase: MovePhase::Clamp,
                },
            );
        }
        out
    }

    fn resolve_axis(&self, out: &mut MoveResolution, radius: f32, moved: f32, phase: MovePhase) {
        let x_axis = phase == MovePhase::AxisX;
        for (index, ob) in self.obstacles.iter().enumerate() {
            if !ob.collidable() {
                continue;
            }
            let b = ob.aabb;
            // Cross-axis overlap gates the push; tangency is a miss.
            let (active, cross, c_active, c_cross, h_active, h_cross) = if x_axis {
                (out.pos.x, out.pos.y, b.center.x, b.center.y, b.half.x, b.half.y)
            } else {
                (out.pos.y, out.pos.x, b.center.y, b.center.x, b.half.y, b.half.x)
            };
            if (cross - c_cross).abs() >= h_cross + radius {
                continue;
            }
            if (active - c_active).abs() >= h_active + radius {
                continue;
            }
            let edge = if moved > 0.0 {
                c_active - h_active - radius
            } else {
                c_active + h_active + radius
            };
            if x_axis {
                out.pos.x = edge;
            } else {
                out.pos.y = edge;
            }
            record(
                &mut out.hits,
                ContactHit {
                    kind: ContactKind::Obstacle {
                        index,
                        kind: ob.kind,
                        temporary: ob.temporary,
                    },
                    phase,
                },
            );
        }
        for (index, hz) in self.hazards.iter().enumerate() {
            if !hz.solid || !hz.collidable() {
                continue;
            }
            if let Some(push) = circle_obb_pushout(out.pos, radius, &hz.obb) {
                let component = if x_axis { push.x } else { push.y };
                if component == 0.0 {
                    continue;
                }
                if x_axis {
                    out.pos.x += component;
                } else {
                    out.pos.y += component;
                }
                record(
                    &mut out.hits,
                    ContactHit {
                        kind: ContactKind::Hazard {
                            index,
                            owner: hz.owner,
                        },
                        phase,
                    },
                );
            }
        }
    }
}
