//! Content selection shared by xtask commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use game_content::{ConfigLoader, MoveCatalogLoader, Scenario, ScenarioLoader};
use game_core::{MoveCatalog, TacticsConfig};
use runtime::IntentKind;
use strum::IntoEnumIterator;

/// Where to read catalog and thresholds from.
#[derive(Args)]
pub struct ContentArgs {
    /// Catalog file or directory of `.ron` files (defaults to the embedded catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Tactics config TOML (defaults to the built-in thresholds)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ContentArgs {
    pub fn load_catalog(&self) -> Result<MoveCatalog> {
        match &self.catalog {
            Some(path) if path.is_dir() => MoveCatalogLoader::load_dir(path),
            Some(path) => MoveCatalogLoader::load(path),
            None => game_content::default_catalog().context("Embedded catalog is invalid"),
        }
    }

    pub fn load_config(&self) -> Result<TacticsConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => Ok(TacticsConfig::default()),
        }
    }
}

/// Resolve a scenario argument: a built-in name or a path to a RON file.
pub fn load_scenario(arg: &str) -> Result<Scenario> {
    let path = Path::new(arg);
    if path.extension().is_some_and(|ext| ext == "ron") || path.exists() {
        return ScenarioLoader::load(path);
    }
    ScenarioLoader::builtin(arg)
}

/// Check that every move a scenario mentions exists in the catalog.
pub fn check_moveset(scenario: &Scenario, catalog: &MoveCatalog) -> Result<()> {
    for snapshot in [&scenario.me, &scenario.enemy] {
        if let Some(unknown) = snapshot.moveset.iter().find(|m| catalog.get(m).is_none()) {
            anyhow::bail!(
                "{} knows `{}`, which is not in the catalog",
                snapshot.name,
                unknown
            );
        }
    }
    Ok(())
}

/// Parse an intent name for clap, listing the valid names on failure.
pub fn parse_intent(name: &str) -> Result<IntentKind, String> {
    name.parse().map_err(|_| {
        let known: Vec<String> = IntentKind::iter().map(|kind| kind.to_string()).collect();
        format!("unknown intent `{name}` (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_intent_accepts_snake_case() {
        assert_eq!(parse_intent("go_for_finish"), Ok(IntentKind::GoForFinish));
    }

    #[test]
    fn parse_intent_lists_known_names() {
        let err = parse_intent("retreat").unwrap_err();
        assert!(err.contains("retreat"));
        assert!(err.contains("wait_and_see"));
    }
}
