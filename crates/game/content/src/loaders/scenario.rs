//! Duel scenario loader.
//!
//! A scenario freezes one moment of a duel: both snapshots, the battle log so
//! far, the phase flag and the turn about to be decided. Scenarios drive the
//! developer CLI and serve as readable test fixtures.

use std::path::Path;

use game_core::{BattleLog, CombatPhase, CombatantSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One frozen duel position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The combatant the AI decides for.
    pub me: CombatantSnapshot,
    pub enemy: CombatantSnapshot,
    #[serde(default)]
    pub log: BattleLog,
    #[serde(default)]
    pub phase: CombatPhase,
    /// Turn about to be decided.
    pub turn: u32,
}

impl Scenario {
    /// Checks both snapshots and that they are distinct combatants.
    pub fn validate(&self) -> LoadResult<()> {
        self.me.validate()?;
        self.enemy.validate()?;
        if self.me.id == self.enemy.id {
            anyhow::bail!(
                "scenario `{}` pits combatant {} against itself",
                self.name,
                self.me.id
            );
        }
        Ok(())
    }
}

/// Embedded scenarios, by file stem.
const BUILTIN_SCENARIOS: [(&str, &str); 3] = [
    ("finishing_blow", include_str!("../../data/scenarios/finishing_blow.ron")),
    ("resource_drought", include_str!("../../data/scenarios/resource_drought.ron")),
    ("turtle", include_str!("../../data/scenarios/turtle.ron")),
];

/// Loader for duel scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate a scenario from RON text; `source` names it in errors.
    pub fn parse(content: &str, source: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON {}: {}", source, e))?;
        scenario
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", source, e))?;
        Ok(scenario)
    }

    /// Names of the scenarios shipped with the crate.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_SCENARIOS.iter().map(|(name, _)| *name)
    }

    /// Load a shipped scenario by name.
    pub fn builtin(name: &str) -> LoadResult<Scenario> {
        let (_, content) = BUILTIN_SCENARIOS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown scenario `{}` (available: {})",
                    name,
                    Self::builtin_names().collect::<Vec<_>>().join(", ")
                )
            })?;
        Self::parse(content, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CombatantId;

    #[test]
    fn test_builtin_scenarios_parse() {
        for name in ScenarioLoader::builtin_names() {
            let scenario = ScenarioLoader::builtin(name)
                .unwrap_or_else(|e| panic!("scenario {name} failed: {e:#}"));
            assert_eq!(scenario.name, name);
            assert!(scenario.turn >= 1);
        }
    }

    #[test]
    fn test_optional_fields_default() {
        let scenario = ScenarioLoader::parse(
            r#"(
                name: "bare",
                me: (id: CombatantId(1), name: "A", health: 50, max_health: 50, defense: 5),
                enemy: (id: CombatantId(2), name: "B", health: 40, max_health: 50, defense: 8),
                turn: 1,
            )"#,
            "inline",
        )
        .unwrap();

        assert_eq!(scenario.me.id, CombatantId(1));
        assert!(scenario.log.is_empty());
        assert_eq!(scenario.phase, CombatPhase::Normal);
        assert!(scenario.me.moveset.is_empty());
    }

    #[test]
    fn test_self_duel_is_rejected() {
        let err = ScenarioLoader::parse(
            r#"(
                name: "mirror",
                me: (id: CombatantId(1), name: "A", health: 50, max_health: 50, defense: 5),
                enemy: (id: CombatantId(1), name: "A", health: 50, max_health: 50, defense: 5),
                turn: 1,
            )"#,
            "inline",
        )
        .unwrap_err();
        assert!(err.to_string().contains("against itself"));
    }

    #[test]
    fn test_invalid_health_is_rejected() {
        let err = ScenarioLoader::parse(
            r#"(
                name: "overheal",
                me: (id: CombatantId(1), name: "A", health: 90, max_health: 50, defense: 5),
                enemy: (id: CombatantId(2), name: "B", health: 50, max_health: 50, defense: 5),
                turn: 1,
            )"#,
            "inline",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid scenario"));
    }

    #[test]
    fn test_unknown_builtin_lists_available() {
        let err = ScenarioLoader::builtin("nope").unwrap_err();
        assert!(err.to_string().contains("finishing_blow"));
    }
}
