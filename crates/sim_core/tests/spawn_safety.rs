use data_core::configs::sim::SimConfigFile;
use glam::Vec2;
use sim_core::{ActorKind, ServerState};

fn cfg() -> SimConfigFile {
    SimConfigFile {
        bounds_half_w: 900.0,
        bounds_half_h: 900.0,
        placement_margin: 50.0,
        spawn_safe_radius: 250.0,
        seed: 1234,
        ..Default::default()
    }
}

#[test]
fn generated_worlds_are_seed_deterministic() {
    let a = ServerState::new(cfg());
    let b = ServerState::new(cfg());
    assert_eq!(a.env.obstacles.len(), b.env.obstacles.len());
    for (x, y) in a.env.obstacles.iter().zip(&b.env.obstacles) {
        assert_eq!(x.aabb, y.aabb);
        assert_eq!(x.kind, y.kind);
    }
    assert!(!a.env.obstacles.is_empty());
}

#[test]
fn scattered_spawns_land_on_clear_legal_ground() {
    let mut s = ServerState::new(cfg());
    let radius = 26.0;
    let ids = s.spawn_scattered(ActorKind::Raider, 40, radius, 50.0);
    assert!(!ids.is_empty());

    let positions: Vec<Vec2> = ids.iter().map(|&id| s.actor(id).unwrap().pos).collect();
    for &p in &positions {
        assert!(s.env.is_inside_bounds(p, radius), "outside bounds: {p:?}");
        assert!(!s.env.circle_hits_any(p, radius), "inside an obstacle: {p:?}");
        assert!(
            p.length() >= s.cfg.spawn_safe_radius,
            "inside the spawn-safe bubble: {p:?}"
        );
    }
    // Batch members reserved their footprints: no two overlap.
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            assert!(
                positions[i].distance(positions[j]) >= 2.0 * radius - 1e-3,
                "stacked spawns at {:?} / {:?}",
                positions[i],
                positions[j]
            );
        }
    }
}

#[test]
fn cluster_spawns_stay_near_their_center_and_off_obstacles() {
    let mut s = ServerState::new(cfg());
    let radius = 26.0;
    let ids = s.spawn_cluster(ActorKind::Raider, 6, radius, 50.0, 120.0);
    assert!(!ids.is_empty());

    let positions: Vec<Vec2> = ids.iter().map(|&id| s.actor(id).unwrap().pos).collect();
    for &p in &positions {
        assert!(s.env.is_inside_bounds(p, radius));
        assert!(!s.env.circle_hits_any(p, radius));
    }
    // Everyone is indexed in the grid at their cached cell.
    for &id in &ids {
        let a = s.actor(id).unwrap();
        assert_eq!(a.cell, s.grid.key(a.pos));
    }
}
