//! Combatant snapshots - the live per-fighter state read by the AI.
//!
//! Snapshots are owned by the surrounding simulation and mutated only by
//! combat resolution. The AI reads them; it never writes them.

mod effects;

pub use effects::{ActiveEffect, ActiveEffects, EffectPolarity};

use std::collections::BTreeMap;

use crate::config::TacticsConfig;
use crate::error::SnapshotError;
use crate::moves::{Move, MoveCatalog};

/// Stable identifier of a combatant within one battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only view of one combatant at the start of its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub id: CombatantId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub defense: u32,
    /// Named resource pool ("chi"); absent in data means zero.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resource: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: ActiveEffects,
    /// Move name → turns until usable again. Zero or absent means ready.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldowns: BTreeMap<String, u32>,
    /// Names of moves used so far, oldest first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub move_history: Vec<String>,
    /// Names of catalog moves this combatant knows. Empty means all of them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub moveset: Vec<String>,
}

impl CombatantSnapshot {
    /// Creates a healthy combatant with no resource, effects or history.
    pub fn new(id: CombatantId, name: impl Into<String>, max_health: u32, defense: u32) -> Self {
        Self {
            id,
            name: name.into(),
            health: max_health,
            max_health,
            defense,
            resource: 0,
            effects: ActiveEffects::empty(),
            cooldowns: BTreeMap::new(),
            move_history: Vec::new(),
            moveset: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: u32) -> Self {
        self.resource = resource;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, move_name: impl Into<String>, turns: u32) -> Self {
        self.cooldowns.insert(move_name.into(), turns);
        self
    }

    #[must_use]
    pub fn with_history<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.move_history.extend(moves.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_moveset<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moveset = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an active effect, failing when the fixed capacity is reached.
    pub fn with_effect(mut self, effect: ActiveEffect) -> Result<Self, SnapshotError> {
        if self.effects.try_push(effect).is_err() {
            return Err(SnapshotError::TooManyEffects {
                name: self.name.clone(),
                limit: TacticsConfig::MAX_ACTIVE_EFFECTS,
            });
        }
        Ok(self)
    }

    /// Checks the shape invariants the AI relies on.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.max_health == 0 {
            return Err(SnapshotError::ZeroMaxHealth {
                name: self.name.clone(),
            });
        }
        if self.health > self.max_health {
            return Err(SnapshotError::HealthAboveMax {
                name: self.name.clone(),
                health: self.health,
                max_health: self.max_health,
            });
        }
        Ok(())
    }

    /// Most recent move, if any.
    pub fn last_move(&self) -> Option<&str> {
        self.move_history.last().map(String::as_str)
    }

    /// Health as a whole percentage of maximum (0-100).
    pub fn health_pct(&self) -> u32 {
        if self.max_health == 0 {
            return 0;
        }
        ((self.health as u64 * 100) / self.max_health as u64).min(100) as u32
    }

    /// Remaining cooldown for a move; zero when ready.
    pub fn cooldown_of(&self, move_name: &str) -> u32 {
        self.cooldowns.get(move_name).copied().unwrap_or(0)
    }

    pub fn is_on_cooldown(&self, move_name: &str) -> bool {
        self.cooldown_of(move_name) > 0
    }

    /// Number of moves currently cooling down.
    pub fn moves_on_cooldown(&self) -> usize {
        self.cooldowns.values().filter(|&&turns| turns > 0).count()
    }

    pub fn can_afford(&self, candidate: &Move) -> bool {
        candidate.cost <= self.resource
    }

    /// True when the move is part of this combatant's moveset.
    pub fn knows(&self, move_name: &str) -> bool {
        self.moveset.is_empty() || self.moveset.iter().any(|known| known == move_name)
    }

    /// Catalog moves this combatant knows, in catalog order.
    pub fn known_moves<'c>(&'c self, catalog: &'c MoveCatalog) -> impl Iterator<Item = &'c Move> {
        catalog.iter().filter(move |entry| self.knows(&entry.name))
    }

    /// Known moves that are off cooldown and affordable right now.
    pub fn usable_moves<'c>(&'c self, catalog: &'c MoveCatalog) -> impl Iterator<Item = &'c Move> {
        self.known_moves(catalog)
            .filter(move |entry| !self.is_on_cooldown(&entry.name) && self.can_afford(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{MoveClass, StatusKind};

    fn fighter() -> CombatantSnapshot {
        CombatantSnapshot::new(CombatantId(1), "Aang", 100, 12)
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert!(fighter().validate().is_ok());
        assert!(matches!(
            fighter().with_health(120).validate(),
            Err(SnapshotError::HealthAboveMax { .. })
        ));
        assert!(matches!(
            CombatantSnapshot::new(CombatantId(2), "Ghost", 0, 0).validate(),
            Err(SnapshotError::ZeroMaxHealth { .. })
        ));
    }

    #[test]
    fn health_pct_rounds_down() {
        assert_eq!(fighter().with_health(29).health_pct(), 29);
        let odd = CombatantSnapshot::new(CombatantId(3), "Odd", 3, 0).with_health(1);
        assert_eq!(odd.health_pct(), 33);
    }

    #[test]
    fn cooldowns_default_to_ready() {
        let snapshot = fighter().with_cooldown("Air Blast", 2).with_cooldown("Glide", 0);
        assert!(snapshot.is_on_cooldown("Air Blast"));
        assert!(!snapshot.is_on_cooldown("Glide"));
        assert!(!snapshot.is_on_cooldown("Unknown"));
        assert_eq!(snapshot.moves_on_cooldown(), 1);
    }

    #[test]
    fn empty_moveset_knows_everything() {
        let catalog = MoveCatalog::new(vec![
            Move::new("Jab", MoveClass::Attack, 5),
            Move::new("Guard", MoveClass::DefenseBuff, 10),
        ])
        .unwrap();

        assert_eq!(fighter().known_moves(&catalog).count(), 2);
        let limited = fighter().with_moveset(["Guard"]);
        let names: Vec<_> = limited.known_moves(&catalog).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Guard"]);
    }

    #[test]
    fn usable_moves_respect_cost_and_cooldown() {
        let catalog = MoveCatalog::new(vec![
            Move::new("Jab", MoveClass::Attack, 5),
            Move::new("Blast", MoveClass::Attack, 40).with_cost(4),
            Move::new("Kick", MoveClass::Attack, 12),
        ])
        .unwrap();
        let snapshot = fighter().with_resource(2).with_cooldown("Kick", 1);

        let names: Vec<_> = snapshot.usable_moves(&catalog).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Jab"]);
    }

    #[test]
    fn effect_capacity_is_reported() {
        let mut snapshot = fighter();
        for i in 0..TacticsConfig::MAX_ACTIVE_EFFECTS {
            snapshot = snapshot
                .with_effect(ActiveEffect::new(format!("burn {i}"), StatusKind::Burn, 1))
                .unwrap();
        }
        let err = snapshot
            .with_effect(ActiveEffect::new("one too many", StatusKind::Burn, 1))
            .unwrap_err();
        assert!(matches!(err, SnapshotError::TooManyEffects { .. }));
    }
}
