//! sim_core: server-authoritative spatial simulation for the arena.
//!
//! Owns the actor arena, the spatial grid, and the fixed-order tick that
//! drives knockback, knock-on propagation, DOT accumulation, and entity
//! lifecycle. Everything runs on one logical thread; a tick is a pure
//! function of previous state, `dt`, and the damage queued since the last
//! tick, so lockstep peers sharing a seed stay identical.

use glam::Vec2;

pub mod actor;
pub mod events;
pub mod grid;
pub mod rng;
pub mod schedule;
pub mod systems;

pub use actor::{
    Actor, ActorCaps, ActorId, ActorKind, ActorStore, DeathCause, DeathHook, DotStack, Health,
    Knockback,
};
pub use collision_world::{Bounds, Environment, HazardBox, MoveResolution, Obstacle};
pub use events::{DamageInput, SimEvent};
pub use grid::{CellKey, SpatialGrid};
pub use rng::SimRng;
pub use schedule::{Ctx, Schedule};

use collision_world::ObstacleGenConfig;
use data_core::configs::sim::SimConfigFile;

pub struct ServerState {
    pub cfg: SimConfigFile,
    pub env: Environment,
    pub actors: ActorStore,
    pub grid: SpatialGrid,
    pub rng: SimRng,
    pending_damage: Vec<DamageInput>,
    queued_events: Vec<SimEvent>,
}

impl ServerState {
    /// Build a world from config: seeded RNG, generated obstacles, empty
    /// actor set. Identical config + seed means an identical world on every
    /// participant.
    pub fn new(cfg: SimConfigFile) -> Self {
        let bounds = if cfg.square_bounds {
            Bounds::Square {
                half: cfg.bounds_half_w,
            }
        } else {
            Bounds::Rect {
                half: Vec2::new(cfg.bounds_half_w, cfg.bounds_half_h),
            }
        };
        let mut rng = SimRng::seeded(cfg.seed);
        let half = bounds.half_extents();
        let gen_cfg = ObstacleGenConfig {
            small_count: cfg.obstacles_small,
            large_count: cfg.obstacles_large,
            small_size: cfg.small_size,
            large_size: cfg.large_size,
            placement_half: (half.x.min(half.y) - cfg.placement_margin).max(0.0),
            spawn_safe_radius: cfg.spawn_safe_radius,
            max_attempts: 32,
        };
        let env = Environment::with_generated(bounds, &gen_cfg, rng.inner());
        Self::with_env(cfg, env, rng)
    }

    /// Build around a hand-assembled environment (tests, scripted arenas).
    pub fn with_env(cfg: SimConfigFile, env: Environment, rng: SimRng) -> Self {
        Self {
            grid: SpatialGrid::new(cfg.cell_size),
            cfg,
            env,
            actors: ActorStore::new(),
            rng,
            pending_damage: Vec::new(),
            queued_events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Actor operations
    // ------------------------------------------------------------------

    /// Spawn at an exact position and index it in the grid.
    pub fn spawn_actor(&mut self, kind: ActorKind, pos: Vec2, radius: f32, hp: f32) -> ActorId {
        let id = self.actors.insert(|id| Actor::new(id, kind, pos, radius, hp));
        let cell = self.grid.insert(id, pos);
        if let Some(a) = self.actors.get_mut(id) {
            a.cell = cell;
        }
        id
    }

    /// Scatter `count` actors across clear ground. Members reserve their
    /// own footprints so a batch never stacks; placement failures are
    /// logged and skipped rather than fatal.
    pub fn spawn_scattered(
        &mut self,
        kind: ActorKind,
        count: usize,
        radius: f32,
        hp: f32,
    ) -> Vec<ActorId> {
        let mut reserved = vec![(Vec2::ZERO, self.cfg.spawn_safe_radius)];
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(p) = systems::spawn::find_clear_position(
                &self.env,
                &mut self.rng,
                radius,
                &reserved,
                64,
            ) else {
                log::warn!("spawn: no clear ground for a {kind:?}; skipping");
                continue;
            };
            reserved.push((p, radius));
            out.push(self.spawn_actor(kind, p, radius, hp));
        }
        out
    }

    /// Spawn a packed cluster around a clear center. Members may touch;
    /// knock-on handles the shoving.
    pub fn spawn_cluster(
        &mut self,
        kind: ActorKind,
        count: usize,
        radius: f32,
        hp: f32,
        spread: f32,
    ) -> Vec<ActorId> {
        let reserved = [(Vec2::ZERO, self.cfg.spawn_safe_radius)];
        let Some(center) = systems::spawn::find_clear_position(
            &self.env,
            &mut self.rng,
            radius + spread,
            &reserved,
            64,
        ) else {
            log::warn!("spawn: no room for a cluster of {count} {kind:?}");
            return Vec::new();
        };
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(p) = systems::spawn::find_position_near(
                &self.env,
                &mut self.rng,
                center,
                spread,
                radius,
                &reserved,
                64,
            ) else {
                continue;
            };
            out.push(self.spawn_actor(kind, p, radius, hp));
        }
        out
    }

    #[inline]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    #[inline]
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Start (or restart) a knockback. Restarting an active knockback keeps
    /// the pushed-target set: it is still the same shove.
    pub fn apply_knockback(&mut self, id: ActorId, vel: Vec2, duration: f32) {
        let Some(a) = self.actors.get_mut(id) else {
            return;
        };
        if !a.alive || duration <= 0.0 {
            return;
        }
        a.kb.vel = vel;
        a.kb.time_left = duration;
        self.queued_events.push(SimEvent::KnockbackApplied { id });
    }

    /// Attach a DOT stack. Non-positive rate or duration is inert.
    pub fn add_dot(&mut self, id: ActorId, dps: f32, duration: f32, owner: Option<ActorId>) {
        if dps <= 0.0 || duration <= 0.0 {
            return;
        }
        if let Some(a) = self.actors.get_mut(id)
            && a.alive
        {
            a.dots.push(DotStack {
                dps,
                time_left: duration,
                owner,
            });
        }
    }

    /// Queue externally computed damage for the next tick.
    pub fn enqueue_damage(&mut self, target: ActorId, amount: f32, source: Option<ActorId>) {
        self.pending_damage.push(DamageInput {
            target,
            amount,
            source,
        });
    }

    /// Mark dead with an explicit cause (`SelfDestruct` for scripted
    /// detonations). Cleanup next tick runs the hook and removal.
    pub fn kill(&mut self, id: ActorId, cause: DeathCause) {
        if let Some(a) = self.actors.get_mut(id) {
            a.mark_dead(cause);
        }
    }

    /// Arm or rearm the self-retirement timer.
    pub fn set_despawn_in(&mut self, id: ActorId, seconds: f32) {
        if let Some(a) = self.actors.get_mut(id)
            && a.alive
        {
            a.despawn_in = Some(seconds.max(0.0));
        }
    }

    /// Re-index one actor after a position change, keeping its cached cell
    /// key honest.
    pub(crate) fn relocate_in_grid(&mut self, id: ActorId) {
        let Some((pos, cached)) = self.actors.get(id).map(|a| (a.pos, a.cell)) else {
            return;
        };
        let key = self.grid.relocate(id, cached, pos);
        if key != cached
            && let Some(a) = self.actors.get_mut(id)
        {
            a.cell = key;
        }
    }

    // ------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------

    /// Run one tick at the configured fixed step.
    pub fn tick_fixed(&mut self) -> Vec<SimEvent> {
        self.tick(self.cfg.tick_dt)
    }

    /// Run one tick and return everything that happened, in order.
    pub fn tick(&mut self, dt: f32) -> Vec<SimEvent> {
        let mut ctx = Ctx::new(dt);
        ctx.events = std::mem::take(&mut self.queued_events);
        ctx.dmg = std::mem::take(&mut self.pending_damage);
        Schedule::run(self, &mut ctx);
        ctx.events
    }
}
