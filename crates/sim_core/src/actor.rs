//! Actor store and combat-actor state.
//!
//! Actors live in a slot arena: `ActorId` is a stable slot index for the
//! actor's whole lifetime, and freed slots are reused. Cross-references
//! (DOT owners, knock-on tracking) hold ids, never references.

use glam::Vec2;

use crate::grid::CellKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Raider,
    Brute,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Hit,
    Dot,
    SelfDestruct,
    Despawn,
}

#[derive(Copy, Clone, Debug)]
pub struct Health {
    pub hp: f32,
    pub max: f32,
}

impl Health {
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0.0
    }
}

/// One timed damage source. Multiple stacks sum their rates while active.
#[derive(Copy, Clone, Debug)]
pub struct DotStack {
    pub dps: f32,
    pub time_left: f32,
    pub owner: Option<ActorId>,
}

/// Knockback state. Inactive knockback holds zero velocity and an empty
/// pushed set.
#[derive(Clone, Debug, Default)]
pub struct Knockback {
    pub vel: Vec2,
    pub time_left: f32,
    /// Distinct secondary targets pushed during the current knockback.
    pub pushed: Vec<ActorId>,
}

impl Knockback {
    #[inline]
    pub fn active(&self) -> bool {
        self.time_left > 0.0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vel = Vec2::ZERO;
        self.time_left = 0.0;
        self.pushed.clear();
    }
}

/// Death hook attached by collaborators (loot, decals, replication). A
/// returned error is logged by the cleanup pass and never propagates.
pub type DeathHook = Box<dyn FnMut(ActorId, DeathCause) -> anyhow::Result<()> + Send>;

/// Per-instance capability table. The simulation loop stays oblivious to
/// specific archetypes; behavior differences hang off this.
#[derive(Default)]
pub struct ActorCaps {
    pub on_death: Option<DeathHook>,
    /// Opaque handle for the render layer; never interpreted here.
    pub render_key: Option<u32>,
}

pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: Health,
    pub alive: bool,
    pub kb: Knockback,
    pub dots: Vec<DotStack>,
    /// Seconds until this actor retires itself, if set.
    pub despawn_in: Option<f32>,
    /// Cached grid cell; must match the grid after any relocation.
    pub cell: CellKey,
    pub caps: ActorCaps,
    pub(crate) death: Option<DeathCause>,
    pub(crate) notified: bool,
}

impl Actor {
    pub fn new(id: ActorId, kind: ActorKind, pos: Vec2, radius: f32, hp: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            radius,
            hp: Health { hp, max: hp },
            alive: true,
            kb: Knockback::default(),
            dots: Vec::new(),
            despawn_in: None,
            cell: (0, 0),
            caps: ActorCaps::default(),
            death: None,
            notified: false,
        }
    }

    /// Idempotent: the first cause wins, later calls are no-ops.
    pub fn mark_dead(&mut self, cause: DeathCause) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.death = Some(cause);
        self.kb.clear();
    }
}

/// Slot arena. Ids are slot indices, stable while the actor lives; removal
/// frees the slot for reuse.
#[derive(Default)]
pub struct ActorStore {
    slots: Vec<Option<Actor>>,
    free: Vec<u32>,
    live: usize,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mk: impl FnOnce(ActorId) -> Actor) -> ActorId {
        let idx = self.free.pop().unwrap_or_else(|| {
            self.slots.push(None);
            (self.slots.len() - 1) as u32
        });
        let id = ActorId(idx);
        self.slots[idx as usize] = Some(mk(id));
        self.live += 1;
        id
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let slot = self.slots.get_mut(id.0 as usize)?;
        let a = slot.take()?;
        self.free.push(id.0);
        self.live -= 1;
        Some(a)
    }

    #[inline]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.slots.iter_mut().filter_map(|s| s.as_mut())
    }

    /// Snapshot of current ids, for loops that mutate the store as they go.
    pub fn ids(&self) -> Vec<ActorId> {
        self.iter().map(|a| a.id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn slots_are_reused_after_removal() {
        let mut store = ActorStore::new();
        let a = store.insert(|id| Actor::new(id, ActorKind::Raider, vec2(0.0, 0.0), 10.0, 50.0));
        let b = store.insert(|id| Actor::new(id, ActorKind::Raider, vec2(1.0, 0.0), 10.0, 50.0));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        store.remove(a);
        assert!(store.get(a).is_none());
        let c = store.insert(|id| Actor::new(id, ActorKind::Brute, vec2(2.0, 0.0), 20.0, 200.0));
        assert_eq!(c, a, "freed slot should be reused");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn mark_dead_is_idempotent_and_clears_knockback() {
        let mut a = Actor::new(ActorId(0), ActorKind::Raider, vec2(0.0, 0.0), 10.0, 50.0);
        a.kb.vel = vec2(5.0, 0.0);
        a.kb.time_left = 1.0;
        a.kb.pushed.push(ActorId(3));

        a.mark_dead(DeathCause::Dot);
        assert!(!a.alive);
        assert_eq!(a.death, Some(DeathCause::Dot));
        assert_eq!(a.kb.vel, Vec2::ZERO);
        assert!(a.kb.pushed.is_empty());

        a.mark_dead(DeathCause::Hit);
        assert_eq!(a.death, Some(DeathCause::Dot), "first cause wins");
    }
}
