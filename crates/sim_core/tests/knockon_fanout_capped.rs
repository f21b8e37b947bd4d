use data_core::configs::sim::SimConfigFile;
use glam::vec2;
use sim_core::{ActorKind, Bounds, Environment, ServerState, SimEvent, SimRng};
use std::collections::HashSet;
use std::f32::consts::TAU;

fn open_world() -> ServerState {
    let cfg = SimConfigFile::default();
    let env = Environment::new(Bounds::Square { half: 2000.0 });
    ServerState::with_env(cfg, env, SimRng::seeded(7))
}

// Five packed neighbors, one fresh knockback: exactly three get shoved.
// Which three is implementation-defined; the count never is.
#[test]
fn exactly_three_of_five_packed_neighbors_are_pushed() {
    let mut s = open_world();
    let pusher = s.spawn_actor(ActorKind::Brute, vec2(0.0, 0.0), 26.0, 200.0);
    let mut ring = Vec::new();
    for i in 0..5 {
        let ang = TAU * i as f32 / 5.0;
        let p = vec2(ang.cos(), ang.sin()) * 40.0;
        ring.push(s.spawn_actor(ActorKind::Raider, p, 26.0, 50.0));
    }

    s.apply_knockback(pusher, vec2(1.0, 0.0), 0.5);
    let events = s.tick(0.1);

    let pushed: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            SimEvent::KnockonPushed { source, target } if *source == pusher => Some(*target),
            _ => None,
        })
        .collect();
    assert_eq!(pushed.len(), 3, "cap must bound the fan-out");
    let distinct: HashSet<_> = pushed.iter().copied().collect();
    assert_eq!(distinct.len(), 3, "no target may be pushed twice");
    assert!(pushed.iter().all(|t| ring.contains(t)));

    let a = s.actor(pusher).unwrap();
    assert_eq!(a.kb.pushed.len(), 3);

    // Pushed neighbors moved away from the pusher; untouched ones did not.
    for (i, &id) in ring.iter().enumerate() {
        let ang = TAU * i as f32 / 5.0;
        let start = vec2(ang.cos(), ang.sin()) * 40.0;
        let now = s.actor(id).unwrap().pos;
        if pushed.contains(&id) {
            assert!(now.distance(vec2(0.0, 0.0)) > start.distance(vec2(0.0, 0.0)));
        } else {
            assert_eq!(now, start);
        }
    }
}

// The cap holds across the whole knockback, not per tick.
#[test]
fn later_ticks_of_the_same_knockback_push_nobody_new() {
    let mut s = open_world();
    let pusher = s.spawn_actor(ActorKind::Brute, vec2(0.0, 0.0), 26.0, 200.0);
    for i in 0..5 {
        let ang = TAU * i as f32 / 5.0;
        s.spawn_actor(ActorKind::Raider, vec2(ang.cos(), ang.sin()) * 40.0, 26.0, 50.0);
    }
    s.apply_knockback(pusher, vec2(0.1, 0.0), 1.0);
    s.tick(0.1);
    for _ in 0..3 {
        let events = s.tick(0.1);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, SimEvent::KnockonPushed { .. })),
            "cap already reached; nothing new may be pushed"
        );
        assert_eq!(s.actor(pusher).unwrap().kb.pushed.len(), 3);
    }
}

// A new knockback after the old one expired starts with a clean slate.
#[test]
fn fresh_knockback_resets_the_push_budget() {
    let mut s = open_world();
    let pusher = s.spawn_actor(ActorKind::Brute, vec2(0.0, 0.0), 26.0, 200.0);
    s.spawn_actor(ActorKind::Raider, vec2(30.0, 0.0), 26.0, 50.0);

    s.apply_knockback(pusher, vec2(0.1, 0.0), 0.1);
    let ev1 = s.tick(0.1);
    assert!(ev1
        .iter()
        .any(|e| matches!(e, SimEvent::KnockonPushed { .. })));
    assert!(s.actor(pusher).unwrap().kb.pushed.is_empty(), "cleared on expiry");

    // Neighbor is now 18 units further out; still within contact range.
    s.apply_knockback(pusher, vec2(0.1, 0.0), 0.1);
    let ev2 = s.tick(0.1);
    assert!(ev2
        .iter()
        .any(|e| matches!(e, SimEvent::KnockonPushed { .. })));
}
