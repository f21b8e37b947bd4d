//! Fixed-order tick schedule.
//!
//! One tick = cleanup of last tick's deaths, externally queued damage,
//! knockback integration, bounded knock-on propagation, DOT accumulation,
//! despawn timers. Systems communicate through `Ctx`, never through shared
//! registries.

use crate::events::{DamageInput, SimEvent};
use crate::systems::{damage, dot, knockback, lifecycle};
use crate::ServerState;

pub struct Ctx {
    pub dt: f32,
    pub dmg: Vec<DamageInput>,
    pub events: Vec<SimEvent>,
}

impl Ctx {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            dmg: Vec::new(),
            events: Vec::new(),
        }
    }
}

pub struct Schedule;

impl Schedule {
    pub fn run(srv: &mut ServerState, ctx: &mut Ctx) {
        lifecycle::cleanup(srv, ctx);
        damage::apply_enqueued(srv, ctx);
        knockback::integrate(srv, ctx);
        knockback::knock_on(srv, ctx);
        dot::tick_stacks(srv, ctx);
        lifecycle::tick_despawn(srv, ctx);
    }
}
