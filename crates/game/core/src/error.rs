//! Validation errors for the combat data model.
//!
//! These errors describe malformed input handed to the core by its caller
//! (a typo in a tag list, a duplicated move name, a snapshot whose health
//! exceeds its maximum). They indicate caller bugs rather than game events
//! and are surfaced at construction time so the AI never sees bad data.
//!
//! Expected game situations, such as every move sitting on cooldown, are not
//! errors; the decision layer reports them as an explicit "no move" result.

/// Errors raised while constructing or validating a [`crate::Move`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Move name is empty or whitespace.
    #[error("move name must not be empty")]
    EmptyName,

    /// Capability tag is not part of the closed tag set.
    #[error("unknown capability tag `{tag}`")]
    UnknownTag { tag: String },

    /// Status effect declared with a zero duration.
    #[error("status effect on `{name}` must last at least one turn")]
    ZeroStatusDuration { name: String },
}

/// Errors raised while assembling a [`crate::MoveCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// A catalog must contain at least one move.
    #[error("move catalog is empty")]
    Empty,

    /// Two entries share the same name.
    #[error("duplicate move `{name}` in catalog")]
    DuplicateMove { name: String },

    /// An entry failed its own validation.
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
}

/// Errors raised while validating a [`crate::CombatantSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotError {
    /// Maximum health must be positive.
    #[error("combatant `{name}` has zero maximum health")]
    ZeroMaxHealth { name: String },

    /// Current health above maximum health.
    #[error("combatant `{name}` has health {health} above maximum {max_health}")]
    HealthAboveMax {
        name: String,
        health: u32,
        max_health: u32,
    },

    /// Active effect list exceeds the fixed capacity.
    #[error("combatant `{name}` exceeds {limit} active effects")]
    TooManyEffects { name: String, limit: usize },
}
