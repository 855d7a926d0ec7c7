//! Move catalog loader.
//!
//! Catalog files are RON lists of [`MoveSpec`]. Tags are written as strings
//! in data and checked against the closed tag set when the catalog is built,
//! so a typo fails at load time instead of silently never matching.

use std::path::Path;

use game_core::{Element, Move, MoveCatalog, MoveClass, MoveError, StatusApplication};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Move as written in a RON data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSpec {
    pub name: String,
    pub class: MoveClass,
    pub power: u32,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<StatusApplication>,
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub cooldown: Option<u32>,
}

impl TryFrom<MoveSpec> for Move {
    type Error = MoveError;

    fn try_from(spec: MoveSpec) -> Result<Self, Self::Error> {
        let mut built = Move::new(spec.name, spec.class, spec.power)
            .with_element(spec.element)
            .with_cost(spec.cost)
            .with_cooldown(spec.cooldown.unwrap_or(0))
            .try_with_tag_names(&spec.tags)?;
        if let Some(status) = spec.status {
            built = built.with_status(status.kind, status.duration);
        }
        built.validate()?;
        Ok(built)
    }
}

/// Embedded catalog files, in catalog order.
const DEFAULT_CATALOG_FILES: [(&str, &str); 3] = [
    ("attacks.ron", include_str!("../../data/moves/attacks.ron")),
    ("defenses.ron", include_str!("../../data/moves/defenses.ron")),
    ("specials.ron", include_str!("../../data/moves/specials.ron")),
];

/// The catalog shipped with the crate.
pub fn default_catalog() -> LoadResult<MoveCatalog> {
    let mut specs = Vec::new();
    for (name, content) in DEFAULT_CATALOG_FILES {
        specs.extend(MoveCatalogLoader::parse_specs(content, name)?);
    }
    MoveCatalogLoader::build(specs)
}

/// Loader for move catalogs from RON files.
pub struct MoveCatalogLoader;

impl MoveCatalogLoader {
    /// Load a move catalog from a single RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a list of MoveSpec
    ///
    /// # Returns
    ///
    /// Returns a validated MoveCatalog in file order.
    pub fn load(path: &Path) -> LoadResult<MoveCatalog> {
        let content = read_file(path)?;
        let specs = Self::parse_specs(&content, &path.display().to_string())?;
        Self::build(specs)
    }

    /// Load every `.ron` file in a directory into one catalog.
    ///
    /// Files are read in name order, so catalog order is stable across
    /// platforms.
    pub fn load_dir(dir: &Path) -> LoadResult<MoveCatalog> {
        let mut paths = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;
        paths.retain(|p| p.extension().is_some_and(|ext| ext == "ron"));
        paths.sort();

        let mut specs = Vec::new();
        for path in &paths {
            let content = read_file(path)?;
            specs.extend(Self::parse_specs(&content, &path.display().to_string())?);
        }
        Self::build(specs)
    }

    /// Parse a list of specs from RON text; `source` names it in errors.
    pub fn parse_specs(content: &str, source: &str) -> LoadResult<Vec<MoveSpec>> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON {}: {}", source, e))
    }

    /// Convert specs into a validated catalog.
    pub fn build(specs: Vec<MoveSpec>) -> LoadResult<MoveCatalog> {
        let moves = specs
            .into_iter()
            .map(Move::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MoveCatalog::new(moves)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MoveTags, StatusKind};
    use std::io::Write;

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog().expect("embedded catalog is valid");

        assert!(catalog.len() >= 10);
        assert!(catalog.iter().any(|m| m.has(MoveTags::FINISHER)));
        assert!(catalog.iter().any(|m| m.has(MoveTags::DESPERATION)));
        assert!(catalog.iter().any(|m| m.has(MoveTags::REST)));
        assert!(catalog.iter().any(|m| m.has(MoveTags::ESCALATION)));
        assert!(catalog.iter().any(|m| m.is_basic() && m.cost == 0));
    }

    #[test]
    fn test_spec_converts_tags_and_status() {
        let spec: MoveSpec = ron::from_str(
            r#"(
                name: "Fire Lash",
                class: attack,
                power: 22,
                element: fire,
                tags: ["high-damage", "piercing"],
                status: Some((kind: burn, duration: 2)),
                cost: 2,
            )"#,
        )
        .unwrap();

        let built = Move::try_from(spec).unwrap();
        assert!(built.has(MoveTags::HIGH_DAMAGE | MoveTags::PIERCING));
        assert!(built.inflicts(StatusKind::Burn));
        assert_eq!(built.element, Element::Fire);
        assert_eq!(built.cooldown, None);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let specs = MoveCatalogLoader::parse_specs(
            r#"[(name: "Jab", class: attack, power: 5, tags: ["quick"])]"#,
            "inline",
        )
        .unwrap();
        let err = MoveCatalogLoader::build(specs).unwrap_err();
        assert!(err.to_string().contains("quick"));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let specs = MoveCatalogLoader::parse_specs(
            r#"[
                (name: "Jab", class: attack, power: 5),
                (name: "Jab", class: attack, power: 6),
            ]"#,
            "inline",
        )
        .unwrap();
        assert!(MoveCatalogLoader::build(specs).is_err());
    }

    #[test]
    fn test_load_dir_reads_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut second = std::fs::File::create(dir.path().join("b.ron")).unwrap();
        writeln!(second, r#"[(name: "Guard", class: defense_buff, power: 10)]"#).unwrap();
        let mut first = std::fs::File::create(dir.path().join("a.ron")).unwrap();
        writeln!(first, r#"[(name: "Jab", class: attack, power: 5)]"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = MoveCatalogLoader::load_dir(dir.path()).unwrap();
        let names: Vec<_> = catalog.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Jab", "Guard"]);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = MoveCatalogLoader::parse_specs("[(name: ", "broken.ron").unwrap_err();
        assert!(err.to_string().contains("broken.ron"));
    }
}
