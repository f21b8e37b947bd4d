//! Damage-over-time accumulation.

use crate::actor::DeathCause;
use crate::events::SimEvent;
use crate::schedule::Ctx;
use crate::ServerState;

/// Tick every actor's DOT stacks: decrement in reverse order, drop expired
/// stacks the tick they expire, sum the surviving rates, and apply
/// `sum * dt` as direct health reduction (no discrete hit side effects).
/// Depletion marks the actor dead with cause `Dot`; cleanup runs next tick.
pub fn tick_stacks(srv: &mut ServerState, ctx: &mut Ctx) {
    let crit_chance = srv.cfg.dot_crit_chance;
    for id in srv.actors.ids() {
        let Some(a) = srv.actors.get_mut(id) else {
            continue;
        };
        if !a.alive || a.dots.is_empty() {
            continue;
        }
        let mut dps_sum = 0.0f32;
        for i in (0..a.dots.len()).rev() {
            a.dots[i].time_left -= ctx.dt;
            if a.dots[i].time_left <= 0.0 {
                a.dots.remove(i);
            } else {
                dps_sum += a.dots[i].dps;
            }
        }
        if dps_sum <= 0.0 {
            continue;
        }
        let amount = dps_sum * ctx.dt;
        a.hp.hp -= amount;
        // Presentation-only roll; drawn from the seeded stream so replays
        // and lockstep peers agree on it.
        let crit = srv.rng.chance(crit_chance);
        ctx.events.push(SimEvent::DamageApplied {
            target: id,
            amount,
            source: None,
            crit,
            over_time: true,
        });
        if !a.hp.alive() {
            a.mark_dead(DeathCause::Dot);
        }
    }
}
