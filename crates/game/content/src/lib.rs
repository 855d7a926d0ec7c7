//! Data-driven content definitions and loaders.
//!
//! This crate houses static duel content and provides loaders for RON/TOML
//! data files:
//! - Move catalogs (data-driven via RON, with an embedded default catalog)
//! - Tactics configuration (data-driven via TOML)
//! - Duel scenarios (data-driven via RON)
//!
//! Content is consumed by the decision runtime and the developer CLI. It never
//! appears in combatant snapshots.
//!
//! All loaders use game-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MoveCatalogLoader, MoveSpec, Scenario,
    ScenarioLoader, default_catalog,
};
