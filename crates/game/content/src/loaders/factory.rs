//! Content factory for loading duel content from a data directory.

use std::path::{Path, PathBuf};

use game_core::{MoveCatalog, TacticsConfig};

use crate::loaders::{ConfigLoader, LoadResult, MoveCatalogLoader, Scenario, ScenarioLoader};

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config/
/// │   └── tactics.toml
/// ├── moves/
/// │   ├── attacks.ron
/// │   ├── defenses.ron
/// │   └── specials.ron
/// └── scenarios/
///     ├── finishing_blow.ron
///     └── turtle.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load tactics thresholds from `config/tactics.toml`.
    pub fn load_config(&self) -> LoadResult<TacticsConfig> {
        let path = self.data_dir.join("config").join("tactics.toml");
        ConfigLoader::load(&path)
    }

    /// Load the move catalog from every file in `moves/`.
    pub fn load_catalog(&self) -> LoadResult<MoveCatalog> {
        MoveCatalogLoader::load_dir(&self.data_dir.join("moves"))
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_bundled_directory_matches_embedded_content() {
        let factory = bundled();

        assert_eq!(factory.load_config().unwrap(), TacticsConfig::default());
        assert_eq!(
            factory.load_catalog().unwrap(),
            crate::loaders::default_catalog().unwrap()
        );
        assert_eq!(
            factory.load_scenario("turtle").unwrap(),
            ScenarioLoader::builtin("turtle").unwrap()
        );
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_catalog().is_err());
        assert!(factory.load_config().is_err());
    }
}
