//! External damage intake.
//!
//! Weapon formulas live outside the core; what arrives here is a final
//! amount per target, queued via `ServerState::enqueue_damage` and applied
//! in order at the top of the tick.

use crate::actor::DeathCause;
use crate::events::SimEvent;
use crate::schedule::Ctx;
use crate::ServerState;

pub fn apply_enqueued(srv: &mut ServerState, ctx: &mut Ctx) {
    let pending = std::mem::take(&mut ctx.dmg);
    for d in pending {
        let Some(a) = srv.actors.get_mut(d.target) else {
            continue;
        };
        if !a.alive || d.amount <= 0.0 {
            continue;
        }
        a.hp.hp -= d.amount;
        ctx.events.push(SimEvent::DamageApplied {
            target: d.target,
            amount: d.amount,
            source: d.source,
            crit: false,
            over_time: false,
        });
        if !a.hp.alive() {
            a.mark_dead(DeathCause::Hit);
        }
    }
}
