//! Per-tick systems. Each operates on `ServerState` + `Ctx` and stays
//! oblivious to specific actor archetypes.

pub mod damage;
pub mod dot;
pub mod knockback;
pub mod lifecycle;
pub mod spawn;
