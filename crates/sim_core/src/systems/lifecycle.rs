//! Death cleanup and despawn timers.

use crate::actor::{ActorId, DeathCause};
use crate::events::SimEvent;
use crate::schedule::Ctx;
use crate::ServerState;

/// Retire every dead actor: run its death hook exactly once (a failing hook
/// is logged, never propagated), emit `ActorDied`, drop it from the grid
/// bucket and free the arena slot. Runs first so no other system observes a
/// dead actor this tick.
pub fn cleanup(srv: &mut ServerState, ctx: &mut Ctx) {
    let dead: Vec<ActorId> = srv.actors.iter().filter(|a| !a.alive).map(|a| a.id).collect();
    for id in dead {
        let (cause, hook, fresh) = {
            let Some(a) = srv.actors.get_mut(id) else {
                continue;
            };
            let cause = a.death.unwrap_or(DeathCause::Despawn);
            let fresh = !a.notified;
            a.notified = true;
            let hook = if fresh { a.caps.on_death.take() } else { None };
            (cause, hook, fresh)
        };
        if let Some(mut hook) = hook
            && let Err(e) = hook(id, cause)
        {
            log::warn!("sim: death hook for actor {} failed: {e:#}", id.0);
        }
        if fresh {
            ctx.events.push(SimEvent::ActorDied { id, cause });
        }
        if let Some(a) = srv.actors.remove(id) {
            srv.grid.remove(id, a.cell);
        }
    }
}

/// Tick self-retirement timers; expiry marks the actor dead with cause
/// `Despawn` and next tick's cleanup does the rest.
pub fn tick_despawn(srv: &mut ServerState, ctx: &Ctx) {
    for a in srv.actors.iter_mut() {
        if !a.alive {
            continue;
        }
        let Some(t) = a.despawn_in.as_mut() else {
            continue;
        };
        *t -= ctx.dt;
        if *t <= 0.0 {
            a.despawn_in = None;
            a.mark_dead(DeathCause::Despawn);
        }
    }
}
