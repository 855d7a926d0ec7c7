//! Timed effects currently active on a combatant.
//!
//! Effects are ticked by combat resolution; the AI only reads them.

use arrayvec::ArrayVec;

use crate::config::TacticsConfig;
use crate::moves::StatusKind;

/// Whether an effect helps or hurts its carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EffectPolarity {
    Buff,
    Debuff,
}

/// A single timed effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    /// Display name, e.g. "Smouldering".
    pub name: String,
    pub polarity: EffectPolarity,
    pub kind: StatusKind,
    /// Turns left before resolution removes it.
    pub remaining: u32,
}

impl ActiveEffect {
    /// Creates an effect whose polarity follows from its kind.
    pub fn new(name: impl Into<String>, kind: StatusKind, remaining: u32) -> Self {
        let polarity = if kind.is_debuff() {
            EffectPolarity::Debuff
        } else {
            EffectPolarity::Buff
        };
        Self {
            name: name.into(),
            polarity,
            kind,
            remaining,
        }
    }
}

/// Bounded list of active effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActiveEffects {
    effects: ArrayVec<ActiveEffect, { TacticsConfig::MAX_ACTIVE_EFFECTS }>,
}

impl ActiveEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect; returns it back when the list is full.
    pub fn try_push(&mut self, effect: ActiveEffect) -> Result<(), ActiveEffect> {
        self.effects
            .try_push(effect)
            .map_err(|overflow| overflow.element())
    }

    /// Effects of the given polarity that still have turns left.
    pub fn count(&self, polarity: EffectPolarity) -> usize {
        self.effects
            .iter()
            .filter(|e| e.polarity == polarity && e.remaining > 0)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
