//! Tactics configuration loader.

use std::path::Path;

use game_core::TacticsConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for tactics thresholds from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing TacticsConfig
    ///
    /// # Returns
    ///
    /// Returns a TacticsConfig. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<TacticsConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<TacticsConfig> {
        let config: TacticsConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// The tuned defaults shipped with the crate.
    pub fn bundled() -> LoadResult<TacticsConfig> {
        Self::parse(include_str!("../../data/config/tactics.toml"))
    }
}
