//! data_core: data-driven tunables for the simulation, loaded from
//! `data/config/*.toml` with sensible defaults when files are absent.

#![forbid(unsafe_code)]

pub mod configs;
