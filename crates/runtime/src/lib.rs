//! Tactical decision-making for turn-based duels.
//!
//! This crate turns two combatant snapshots, a battle log and a move catalog
//! into one chosen move plus an explanation of why it was chosen. Callers plug
//! it in through the [`MoveProvider`] seam and carry the returned
//! [`AiDecisionState`] from one turn to the next.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the request, decision and error types callers use
//! - [`providers`] hosts the tactical AI pipeline
pub mod api;
pub mod providers;

pub use api::{Decision, DecisionError, DecisionRequest, MoveProvider, Result, Side};
pub use providers::ai::{
    AiDecisionState, Alternative, BehaviorPattern, ChoiceBasis, DecisionTrace, GamePhase, Intent,
    IntentKind, IntentSelector, MoveScorer, NoMoveReason, ScoredMove, TacticalAiProvider,
    TacticalContext,
};
