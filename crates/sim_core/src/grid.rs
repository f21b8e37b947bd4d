//! Uniform spatial grid over dynamic actors (2D broad phase).
//!
//! Cells are keyed by truncated world coordinates; each populated cell maps
//! to an unordered bucket of actor ids. A live actor sits in exactly one
//! bucket and caches its key; callers pass that cached key back in so
//! removal never has to search.

use std::collections::HashMap;

use glam::Vec2;

use crate::actor::{ActorId, ActorStore};

pub type CellKey = (i32, i32);

#[derive(Debug, Default)]
pub struct SpatialGrid {
    cell: f32,
    buckets: HashMap<CellKey, Vec<ActorId>>,
}

impl SpatialGrid {
    pub fn new(cell: f32) -> Self {
        Self {
            cell: cell.max(1.0),
            buckets: HashMap::new(),
        }
    }

    #[inline]
    pub fn key(&self, p: Vec2) -> CellKey {
        (
            (p.x / self.cell).floor() as i32,
            (p.y / self.cell).floor() as i32,
        )
    }

    /// Insert and return the key for the caller to cache.
    pub fn insert(&mut self, id: ActorId, p: Vec2) -> CellKey {
        let key = self.key(p);
        self.buckets.entry(key).or_default().push(id);
        key
    }

    /// Remove by identity from the cached key's bucket; empty buckets are
    /// dropped. Absent entries are tolerated.
    pub fn remove(&mut self, id: ActorId, key: CellKey) {
        if let Some(bucket) = self.buckets.get_mut(&key) {
            if let Some(i) = bucket.iter().position(|&x| x == id) {
                bucket.swap_remove(i);
            }
            if bucket.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }

    /// Re-index after a position change. No-op when the cell is unchanged;
    /// returns the new key for the caller to cache.
    pub fn relocate(&mut self, id: ActorId, cached: CellKey, p: Vec2) -> CellKey {
        let key = self.key(p);
        if key == cached {
            return cached;
        }
        self.remove(id, cached);
        self.buckets.entry(key).or_default().push(id);
        key
    }

    /// Approximate-then-exact circle query: broad phase over every cell the
    /// query's bounding square touches, narrow phase by squared distance
    /// against live actors only.
    pub fn query_circle(&self, p: Vec2, r: f32, actors: &ActorStore, out: &mut Vec<ActorId>) {
        let x0 = ((p.x - r) / self.cell).floor() as i32;
        let x1 = ((p.x + r) / self.cell).floor() as i32;
        let y0 = ((p.y - r) / self.cell).floor() as i32;
        let y1 = ((p.y + r) / self.cell).floor() as i32;
        let r2 = r * r;
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                let Some(bucket) = self.buckets.get(&(cx, cy)) else {
                    continue;
                };
                for &id in bucket {
                    let Some(a) = actors.get(id) else { continue };
                    if a.alive && (a.pos - p).length_squared() <= r2 {
                        out.push(id);
                    }
                }
            }
        }
    }

    /// Populated cell count (diagnostics and tests).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
