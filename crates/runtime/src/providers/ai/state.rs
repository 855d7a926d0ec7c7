//! Per-agent decision memory carried between turns.

use serde::Serialize;

use super::{Intent, IntentKind, TacticalContext};

/// What one agent remembers from its previous decision.
///
/// Owned by the caller and handed back on the next turn. Each decision
/// produces a new state; the old one is never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AiDecisionState {
    pub intent: Intent,
    /// Consecutive turns the current intent has been held, including this one.
    pub turns_held: u32,
    /// Turn on which the current intent was adopted.
    pub last_intent_change: u32,
    /// Context computed for the decision that produced this state.
    pub last_context: Option<TacticalContext>,
}

impl AiDecisionState {
    /// State that makes the next decision start from `kind`, as if it had
    /// just been adopted on `turn`.
    ///
    /// This is the only way `wait_and_see` enters play.
    pub fn seeded(kind: IntentKind, turn: u32) -> Self {
        Self {
            intent: Intent::new(kind, "seeded by caller"),
            turns_held: 0,
            last_intent_change: turn,
            last_context: None,
        }
    }

    pub fn kind(&self) -> IntentKind {
        self.intent.kind
    }
}
