//! Error types surfaced by the decision API.
//!
//! Only malformed input is an error. A turn on which no move can be chosen is
//! a normal outcome and is reported through the decision trace instead.
use game_core::{CombatantId, SnapshotError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecisionError>;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("invalid {side} snapshot")]
    InvalidSnapshot {
        side: Side,
        #[source]
        source: SnapshotError,
    },

    #[error("combatant {id} cannot face itself")]
    SameCombatant { id: CombatantId },
}

/// Which snapshot of a decision request failed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Own,
    Enemy,
}
