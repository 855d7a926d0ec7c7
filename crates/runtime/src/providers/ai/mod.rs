//! Tactical AI for turn-based duels.
//!
//! Each turn the agent runs the same pipeline:
//!
//! 1. **Context**: Derive a [`TacticalContext`] from both snapshots and the log
//!    - Pressure, streaks, behavior patterns, momentum, game phase
//!
//! 2. **Intent**: Keep the previous [`Intent`] if it still holds, otherwise
//!    pick a fresh one from the ordered rule table in [`IntentSelector`]
//!
//! 3. **Legality**: Filter the catalog by phase, cooldown and staleness
//!
//! 4. **Scoring**: Rank the legal moves with [`MoveScorer`]
//!    - Class value, affordability, intent alignment, context bonuses, noise
//!
//! 5. **Selection**: Play the best move and record a [`DecisionTrace`]
//!
//! # Core Components
//!
//! - [`TacticalAiProvider`]: Main provider implementing [`crate::MoveProvider`]
//! - [`TacticalContext`]: Derived per-turn signals
//! - [`IntentSelector`]: Rule cascade and continuation predicates
//! - [`MoveScorer`]: Explainable move scoring
//! - [`AiDecisionState`]: Memory carried between turns

pub mod context;
pub mod legality;
pub mod provider;
pub mod scoring;
pub mod state;
pub mod trace;
pub mod types;

// Re-export public API
pub use context::{BehaviorPattern, GamePhase, SideSignals, TacticalContext};
pub use legality::{LegalMoves, NoMoveReason};
pub use provider::TacticalAiProvider;
pub use scoring::actions::{MoveScorer, NoiseSource, ScoredMove};
pub use scoring::selector::IntentSelector;
pub use state::AiDecisionState;
pub use trace::{Alternative, ChoiceBasis, DecisionTrace};
pub use types::{Intent, IntentKind};
