//! Tick-scoped side-effect events.
//!
//! Collaborators (damage text, VFX, replication) consume the event list a
//! tick returns instead of registering callbacks on shared state.

use crate::actor::{ActorId, DeathCause};

/// Externally sourced damage, queued between ticks and applied in order.
#[derive(Copy, Clone, Debug)]
pub struct DamageInput {
    pub target: ActorId,
    pub amount: f32,
    pub source: Option<ActorId>,
}

#[derive(Copy, Clone, Debug)]
pub enum SimEvent {
    DamageApplied {
        target: ActorId,
        amount: f32,
        source: Option<ActorId>,
        /// Cosmetic flag rolled on the seeded stream; presentation only.
        crit: bool,
        /// True when the damage came from DOT accumulation.
        over_time: bool,
    },
    ActorDied {
        id: ActorId,
        cause: DeathCause,
    },
    KnockbackApplied {
        id: ActorId,
    },
    KnockonPushed {
        source: ActorId,
        target: ActorId,
    },
}
