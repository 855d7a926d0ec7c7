use std::collections::HashSet;

use super::Move;
use crate::error::CatalogError;

/// Ordered, immutable collection of moves shared by both combatants.
///
/// Catalog order is meaningful: it is the deterministic tie-break order when
/// two candidates score identically.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveCatalog {
    moves: Vec<Move>,
}

impl MoveCatalog {
    /// Builds a catalog, validating every move and rejecting duplicates.
    pub fn new(moves: Vec<Move>) -> Result<Self, CatalogError> {
        if moves.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for entry in &moves {
            entry.validate()?;
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateMove {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { moves })
    }

    /// Looks up a move by exact name.
    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|entry| entry.name == name)
    }

    /// Catalog position of a move, used to derive per-candidate RNG seeds.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|entry| entry.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl<'a> IntoIterator for &'a MoveCatalog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
