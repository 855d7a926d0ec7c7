//! Content loaders for reading duel data from files.
//!
//! Each loader turns a RON or TOML file into validated game-core types.

pub mod config;
pub mod factory;
pub mod moves;
pub mod scenario;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use moves::{MoveCatalogLoader, MoveSpec, default_catalog};
pub use scenario::{Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
