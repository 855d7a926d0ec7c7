//! Combat data model shared by the tactical AI, content loaders and tooling.
//!
//! `game-core` defines moves and their capability flags, combatant snapshots,
//! the append-only battle log, the combat phase signal and the tunable
//! thresholds of the AI. Everything here is plain data plus validation; no
//! function performs I/O.
pub mod combatant;
pub mod config;
pub mod error;
pub mod log;
pub mod moves;
pub mod phase;
pub mod rng;

pub use combatant::{
    ActiveEffect, ActiveEffects, CombatantId, CombatantSnapshot, EffectPolarity,
};
pub use config::TacticsConfig;
pub use error::{CatalogError, MoveError, SnapshotError};
pub use log::{BattleLog, LogEntry};
pub use moves::{
    Element, Move, MoveCatalog, MoveClass, MoveTags, StatusApplication, StatusKind,
};
pub use phase::CombatPhase;
pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed};
