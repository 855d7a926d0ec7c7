//! Core types for the tactical AI.
//!
//! This module defines the strategic [`Intent`] an agent commits to for one or
//! more turns. Intents are chosen by [`super::IntentSelector`] and bias move
//! scoring through the alignment table in [`super::scoring::actions`].

use serde::Serialize;

/// High-level strategic posture.
///
/// Each variant corresponds to one rule of the selection cascade (except
/// [`IntentKind::WaitAndSee`], which is never selected by the cascade and only
/// enters through a seeded decision state).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentKind {
    /// Absorb incoming burst damage.
    Defend,

    /// All-in offense when survival is unlikely.
    DesperateAttack,

    /// Recover the resource pool.
    RestoreChi,

    /// Punch through a turtling opponent.
    BreakDefense,

    /// Land the finishing blow on an exposed opponent.
    GoForFinish,

    /// Keep hitting an exposed opponent.
    PressureEnemy,

    /// Ride the current damage advantage.
    BuildMomentum,

    /// Plain offense with nothing urgent going on.
    StandardAttack,

    /// Buy time while behind.
    Stall,

    /// Punish an aggressive opponent.
    CounterAttack,

    /// Low-risk opening play.
    ConservativePlay,

    /// Observe before committing.
    WaitAndSee,
}

impl IntentKind {
    /// Priority attached when the cascade selects this kind.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Defend => 10,
            Self::DesperateAttack => 9,
            Self::RestoreChi => 8,
            Self::BreakDefense | Self::GoForFinish => 7,
            Self::PressureEnemy | Self::BuildMomentum => 6,
            Self::Stall | Self::CounterAttack => 5,
            Self::StandardAttack | Self::ConservativePlay => 3,
            Self::WaitAndSee => 1,
        }
    }

    /// Turns the agent expects to hold this intent.
    pub const fn expected_duration(self) -> u32 {
        match self {
            Self::GoForFinish | Self::StandardAttack | Self::WaitAndSee => 1,
            Self::BuildMomentum | Self::ConservativePlay => 3,
            _ => 2,
        }
    }

    /// True for postures built around attacking.
    pub const fn is_offensive(self) -> bool {
        matches!(
            self,
            Self::DesperateAttack
                | Self::BreakDefense
                | Self::GoForFinish
                | Self::PressureEnemy
                | Self::BuildMomentum
                | Self::StandardAttack
                | Self::CounterAttack
        )
    }
}

/// A chosen intent together with why it was chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub kind: IntentKind,
    /// Human-readable reason, surfaced in decision traces.
    pub rationale: String,
    pub priority: u8,
    pub expected_duration: u32,
}

impl Intent {
    /// Creates an intent with the kind's default priority and duration.
    pub fn new(kind: IntentKind, rationale: impl Into<String>) -> Self {
        Self {
            kind,
            rationale: rationale.into(),
            priority: kind.priority(),
            expected_duration: kind.expected_duration(),
        }
    }

    /// Overrides the default priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_use_snake_case_names() {
        assert_eq!(IntentKind::GoForFinish.to_string(), "go_for_finish");
        assert_eq!(
            "restore_chi".parse::<IntentKind>(),
            Ok(IntentKind::RestoreChi)
        );
    }

    #[test]
    fn every_kind_has_a_positive_duration() {
        for kind in IntentKind::iter() {
            assert!(kind.expected_duration() >= 1, "{kind}");
            assert!(kind.priority() >= 1, "{kind}");
        }
    }

    #[test]
    fn new_takes_kind_defaults() {
        let intent = Intent::new(IntentKind::Defend, "enemy burst incoming");
        assert_eq!(intent.priority, 10);
        assert_eq!(intent.expected_duration, 2);
        assert_eq!(intent.with_priority(6).priority, 6);
    }
}
