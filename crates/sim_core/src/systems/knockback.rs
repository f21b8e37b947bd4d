//! Knockback integration and bounded knock-on propagation.

use glam::Vec2;

use crate::events::SimEvent;
use crate::schedule::Ctx;
use crate::ServerState;

/// Advance knockback-driven motion through the collision world. The step is
/// clipped to the remaining knockback time; when the timer runs out the
/// velocity and the pushed-target set both clear.
pub fn integrate(srv: &mut ServerState, ctx: &mut Ctx) {
    for id in srv.actors.ids() {
        let (pos, radius, disp, step) = {
            let Some(a) = srv.actors.get(id) else { continue };
            if !a.alive || !a.kb.active() {
                continue;
            }
            let step = a.kb.time_left.min(ctx.dt);
            (a.pos, a.radius, a.kb.vel * step, step)
        };
        let res = srv.env.resolve_circle_move(pos, radius, disp);
        if let Some(a) = srv.actors.get_mut(id) {
            a.pos = res.pos;
            a.kb.time_left -= step;
            if !a.kb.active() {
                a.kb.clear();
            }
        }
        srv.relocate_in_grid(id);
    }
}

/// Secondary pushes around actors in active knockback. Each pusher may
/// displace at most `knockon_cap` distinct neighbors over the lifetime of
/// one knockback; the cap bounds chain reactions in dense clusters.
pub fn knock_on(srv: &mut ServerState, ctx: &mut Ctx) {
    let cap = srv.cfg.knockon_cap;
    let push_dist = srv.cfg.knockon_push;
    let radius_scale = srv.cfg.knockon_radius_scale;
    let mut near = Vec::new();

    for id in srv.actors.ids() {
        let (pos, radius) = {
            let Some(a) = srv.actors.get(id) else { continue };
            if !a.alive || !a.kb.active() || a.kb.pushed.len() >= cap {
                continue;
            }
            (a.pos, a.radius)
        };

        near.clear();
        srv.grid
            .query_circle(pos, radius * radius_scale, &srv.actors, &mut near);

        for &nid in &near {
            if nid == id {
                continue;
            }
            let full = {
                let Some(a) = srv.actors.get(id) else { break };
                if a.kb.pushed.contains(&nid) {
                    continue;
                }
                a.kb.pushed.len() >= cap
            };
            if full {
                break;
            }
            let (npos, nradius) = {
                let Some(n) = srv.actors.get(nid) else { continue };
                if !n.alive {
                    continue;
                }
                (n.pos, n.radius)
            };
            let delta = npos - pos;
            let reach = radius + nradius;
            if delta.length_squared() > reach * reach {
                continue;
            }
            let mut dir = delta.normalize_or_zero();
            if dir == Vec2::ZERO {
                dir = Vec2::X;
            }
            let res = srv.env.resolve_circle_move(npos, nradius, dir * push_dist);
            if let Some(n) = srv.actors.get_mut(nid) {
                n.pos = res.pos;
            }
            srv.relocate_in_grid(nid);
            if let Some(a) = srv.actors.get_mut(id) {
                a.kb.pushed.push(nid);
            }
            ctx.events.push(SimEvent::KnockonPushed {
                source: id,
                target: nid,
            });
        }
    }
}
