//! Simulation tuning loaded from data/config/sim.toml with sensible
//! defaults and clamping.

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SimConfigFile {
    /// Fixed tick length in seconds.
    pub tick_dt: f32,
    /// Spatial grid cell edge; a small multiple of the typical entity radius.
    pub cell_size: f32,
    /// Square boundary when true (half extent `bounds_half_w`); otherwise a
    /// rectangle with independent half extents.
    pub square_bounds: bool,
    pub bounds_half_w: f32,
    pub bounds_half_h: f32,
    /// Max distinct secondary targets one knockback may push.
    pub knockon_cap: usize,
    /// Fixed knock-on push distance.
    pub knockon_push: f32,
    /// Knock-on query radius as a multiple of the actor's own radius.
    pub knockon_radius_scale: f32,
    /// Cosmetic crit chance rolled on the seeded stream during DOT ticks.
    pub dot_crit_chance: f32,
    pub obstacles_small: usize,
    pub obstacles_large: usize,
    pub small_size: [f32; 2],
    pub large_size: [f32; 2],
    /// Keep generated obstacles this far off the boundary edge.
    pub placement_margin: f32,
    /// No obstacle or spawn may intrude on this circle around the origin.
    pub spawn_safe_radius: f32,
    pub seed: u64,
}

impl Default for SimConfigFile {
    fn default() -> Self {
        Self {
            tick_dt: 1.0 / 60.0,
            cell_size: 96.0,
            square_bounds: true,
            bounds_half_w: 2048.0,
            bounds_half_h: 2048.0,
            knockon_cap: 3,
            knockon_push: 18.0,
            knockon_radius_scale: 2.5,
            dot_crit_chance: 0.05,
            obstacles_small: 12,
            obstacles_large: 5,
            small_size: [60.0, 120.0],
            large_size: [180.0, 320.0],
            placement_margin: 64.0,
            spawn_safe_radius: 300.0,
            seed: 0x00A11CE5,
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

fn clamp(mut cfg: SimConfigFile) -> SimConfigFile {
    if cfg.tick_dt < 1.0 / 240.0 {
        cfg.tick_dt = 1.0 / 240.0;
    }
    if cfg.cell_size < 8.0 {
        cfg.cell_size = 8.0;
    }
    if cfg.knockon_cap > 8 {
        cfg.knockon_cap = 8;
    }
    cfg.dot_crit_chance = cfg.dot_crit_chance.clamp(0.0, 1.0);
    if cfg.obstacles_small > 256 {
        cfg.obstacles_small = 256;
    }
    if cfg.obstacles_large > 256 {
        cfg.obstacles_large = 256;
    }
    cfg
}

/// Load the sim config from the default location, falling back to defaults
/// when the file is missing.
pub fn load_default() -> Result<SimConfigFile> {
    let path = data_root().join("config/sim.toml");
    if !path.is_file() {
        return Ok(SimConfigFile::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: SimConfigFile = toml::from_str(&txt).context("parse TOML")?;
    Ok(clamp(parsed))
}
