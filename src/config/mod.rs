// src/config/mod.rs
//! Configuration system for youtube-key-vault
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! The master key itself is never part of this struct, only the
//! optional hex secret it is derived from.

pub use app::{load, Config};

mod app;
mod defaults;
