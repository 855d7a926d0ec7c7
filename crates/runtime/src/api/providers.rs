//! Abstraction for sourcing a combatant's next move.
//!
//! The surrounding simulation plugs in [`MoveProvider`] implementations so a
//! battle can run with the tactical AI, scripted fixtures, or human input
//! behind the same call.
use game_core::{BattleLog, CombatPhase, CombatantSnapshot, Move, MoveCatalog};

use super::errors::Result;
use crate::providers::ai::{AiDecisionState, DecisionTrace};

/// Everything a provider may read to pick one move.
#[derive(Clone, Copy, Debug)]
pub struct DecisionRequest<'a> {
    pub me: &'a CombatantSnapshot,
    pub enemy: &'a CombatantSnapshot,
    pub turn: u32,
    pub log: &'a BattleLog,
    pub catalog: &'a MoveCatalog,
    pub phase: CombatPhase,
    /// State returned by this provider's previous decision for `me`.
    pub previous: Option<&'a AiDecisionState>,
}

impl<'a> DecisionRequest<'a> {
    /// Request for the normal phase with no prior state.
    pub fn new(
        me: &'a CombatantSnapshot,
        enemy: &'a CombatantSnapshot,
        turn: u32,
        log: &'a BattleLog,
        catalog: &'a MoveCatalog,
    ) -> Self {
        Self {
            me,
            enemy,
            turn,
            log,
            catalog,
            phase: CombatPhase::Normal,
            previous: None,
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: CombatPhase) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub fn with_previous(mut self, previous: Option<&'a AiDecisionState>) -> Self {
        self.previous = previous;
        self
    }
}

/// Outcome of one decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<'a> {
    /// The move to play, or `None` when no move is legal this turn.
    pub chosen: Option<&'a Move>,
    pub trace: DecisionTrace,
    /// State to pass back on this combatant's next turn.
    pub state: AiDecisionState,
}

/// Trait for choosing a combatant's move.
///
/// Different implementations can handle:
/// - The tactical AI
/// - Player input (from UI/CLI)
/// - Scripted/replayed moves
/// - Testing fixtures
pub trait MoveProvider: Send + Sync {
    /// Choose a move for `request.me`.
    ///
    /// # Returns
    /// The decision, or an error if the request itself is malformed
    fn decide<'a>(&self, request: DecisionRequest<'a>) -> Result<Decision<'a>>;
}
