//! Move definitions - the static, shared catalog entries agents choose from.
//!
//! A [`Move`] is immutable once built. Tags are a closed [`MoveTags`] bitset,
//! and [`Move::validate`] checks the invariants the scorer relies on.

mod catalog;
mod tags;

pub use catalog::MoveCatalog;
pub use tags::MoveTags;

use crate::error::MoveError;

/// Broad class of a move, driving its base value in scoring.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveClass {
    /// Deals damage to the opponent.
    Attack,
    /// Raises own defense or blocks.
    DefenseBuff,
    /// Neither attacks nor defends directly (rests, focus, feints).
    Utility,
}

/// Elemental or physical nature of a move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    #[default]
    Physical,
    Fire,
    Water,
    Earth,
    Air,
    Lightning,
}

/// Status effects a move can inflict or a combatant can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Target loses its next action.
    Stun,
    /// Damage over time.
    Burn,
    /// Weaker damage over time.
    Poison,
    /// Outgoing damage reduced.
    Weaken,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Incoming damage reduced.
    Shield,
    /// Health recovery over time.
    Regenerate,
}

impl StatusKind {
    /// True for effects that harm whoever carries them.
    pub const fn is_debuff(&self) -> bool {
        matches!(self, Self::Stun | Self::Burn | Self::Poison | Self::Weaken)
    }
}

/// Status effect a move applies on use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    pub kind: StatusKind,
    /// Turns the effect lasts once applied.
    pub duration: u32,
}

impl StatusApplication {
    pub const fn new(kind: StatusKind, duration: u32) -> Self {
        Self { kind, duration }
    }
}

/// A single catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Unique identifier within a catalog.
    pub name: String,
    pub class: MoveClass,
    /// Offensive power for attacks, defensive power for defense moves.
    pub power: u32,
    pub element: Element,
    pub tags: MoveTags,
    pub status: Option<StatusApplication>,
    /// Resource spent on use; zero for free moves.
    pub cost: u32,
    /// Turns the move is unavailable after use.
    pub cooldown: Option<u32>,
}

impl Move {
    /// Creates a physical move with no tags, status, cost or cooldown.
    pub fn new(name: impl Into<String>, class: MoveClass, power: u32) -> Self {
        Self {
            name: name.into(),
            class,
            power,
            element: Element::Physical,
            tags: MoveTags::empty(),
            status: None,
            cost: 0,
            cooldown: None,
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: MoveTags) -> Self {
        self.tags |= tags;
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, duration: u32) -> Self {
        self.status = Some(StatusApplication::new(kind, duration));
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = (turns > 0).then_some(turns);
        self
    }

    /// Parses string tags and adds them to this move.
    pub fn try_with_tag_names<I, S>(self, tags: I) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.with_tags(MoveTags::parse(tags)?))
    }

    /// Checks the invariants the AI relies on.
    pub fn validate(&self) -> Result<(), MoveError> {
        if self.name.trim().is_empty() {
            return Err(MoveError::EmptyName);
        }
        if matches!(self.status, Some(status) if status.duration == 0) {
            return Err(MoveError::ZeroStatusDuration {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn is_attack(&self) -> bool {
        self.class == MoveClass::Attack
    }

    pub fn is_defensive(&self) -> bool {
        self.class == MoveClass::DefenseBuff
    }

    pub fn has(&self, tags: MoveTags) -> bool {
        self.tags.contains(tags)
    }

    /// Plain everyday move, as opposed to a special or phase move.
    pub fn is_basic(&self) -> bool {
        self.tags.contains(MoveTags::BASIC)
    }

    /// Heavy hitter: tagged as such or above the given power threshold.
    pub fn is_high_damage(&self, threshold: u32) -> bool {
        self.tags.contains(MoveTags::HIGH_DAMAGE) || self.power > threshold
    }

    pub fn inflicts(&self, kind: StatusKind) -> bool {
        matches!(self.status, Some(status) if status.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let fireball = Move::new("Fireball", MoveClass::Attack, 35)
            .with_element(Element::Fire)
            .with_tags(MoveTags::HIGH_DAMAGE)
            .with_status(StatusKind::Burn, 2)
            .with_cost(3)
            .with_cooldown(2);

        assert!(fireball.is_attack());
        assert!(fireball.inflicts(StatusKind::Burn));
        assert!(fireball.is_high_damage(30));
        assert_eq!(fireball.cooldown, Some(2));
        assert!(fireball.validate().is_ok());
    }

    #[test]
    fn zero_cooldown_means_none() {
        let jab = Move::new("Jab", MoveClass::Attack, 5).with_cooldown(0);
        assert_eq!(jab.cooldown, None);
    }

    #[test]
    fn empty_name_fails_validation() {
        let nameless = Move::new("  ", MoveClass::Utility, 0);
        assert_eq!(nameless.validate(), Err(MoveError::EmptyName));
    }

    #[test]
    fn zero_duration_status_fails_validation() {
        let fizzle = Move::new("Fizzle", MoveClass::Attack, 3).with_status(StatusKind::Stun, 0);
        assert!(matches!(
            fizzle.validate(),
            Err(MoveError::ZeroStatusDuration { .. })
        ));
    }

    #[test]
    fn tag_names_are_checked() {
        let result = Move::new("Jab", MoveClass::Attack, 5).try_with_tag_names(["basic", "quick"]);
        assert!(matches!(result, Err(MoveError::UnknownTag { .. })));
    }

    #[test]
    fn high_damage_threshold_is_strict() {
        let strike = Move::new("Strike", MoveClass::Attack, 30);
        assert!(!strike.is_high_damage(30));
        assert!(strike.is_high_damage(29));
    }

    #[test]
    fn class_parses_from_snake_case() {
        let class: MoveClass = "defense_buff".parse().unwrap();
        assert_eq!(class, MoveClass::DefenseBuff);
        assert_eq!(MoveClass::DefenseBuff.to_string(), "defense_buff");
    }
}
