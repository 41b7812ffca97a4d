//! Domain queries over the loaded set catalog.
//!
//! Every operation is one stateless pass over the repository; the catalog is
//! small and read-only, so linear scans are intentional and no secondary
//! index is kept. Results borrow from the loaded records or are collected
//! fresh per call, so repeated invocations always agree.

use crate::catalog::identity::SetNumber;
use crate::catalog::model::LegoSet;
use crate::catalog::repository::{LoadError, Repository};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
/// Fault raised by a single query; the loaded collection stays intact.
pub enum QueryError {
    #[error("the catalog contains no sets")]
    EmptyCatalog,
    #[error("set {0} has no theme")]
    MissingTheme(SetNumber),
}

/// The set catalog: a loaded repository plus the domain query surface.
pub struct SetCatalog {
    repo: Repository<LegoSet>,
}

impl SetCatalog {
    /// Load the catalog once from `path`.
    ///
    /// Set numbers are expected to be unique in the source but duplicates are
    /// kept and only logged; number lookups return every match.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let repo = Repository::load(path)?;
        warn_on_duplicate_numbers(repo.get_all());
        Ok(Self { repo })
    }

    /// All sets in source order.
    pub fn sets(&self) -> &[LegoSet] {
        self.repo.get_all()
    }

    /// How many sets carry `tag` exactly (case-sensitive). Sets without a tag
    /// collection never match.
    pub fn count_with_tag(&self, tag: &str) -> usize {
        self.sets().iter().filter(|set| set.has_tag(tag)).count()
    }

    /// Names of the sets whose number equals `number`, lazily, in source
    /// order. No match yields an empty iterator, never an error.
    pub fn names_by_number<'a>(&'a self, number: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sets()
            .iter()
            .filter(move |set| set.number.as_str() == number)
            .map(|set| set.name.as_str())
    }

    /// Piece count of the largest set in the catalog.
    ///
    /// There is no sentinel for "no sets"; an empty catalog is a fault. Ties
    /// are indistinguishable because only the count is returned.
    pub fn max_pieces(&self) -> Result<u32, QueryError> {
        self.sets()
            .iter()
            .map(|set| set.pieces)
            .max()
            .ok_or(QueryError::EmptyCatalog)
    }

    /// Names of the sets whose theme equals `theme` exactly, in source order.
    ///
    /// A record without a theme violates the source contract and fails the
    /// whole query; skipping it would silently undercount the answer.
    pub fn names_by_theme(&self, theme: &str) -> Result<Vec<&str>, QueryError> {
        let mut names = Vec::new();
        for set in self.sets() {
            let set_theme = set
                .theme
                .as_ref()
                .ok_or_else(|| QueryError::MissingTheme(set.number.clone()))?;
            if set_theme.as_str() == theme {
                names.push(set.name.as_str());
            }
        }
        Ok(names)
    }

    /// Names of the sets with strictly fewer than `limit` pieces, in source
    /// order. Negative limits are legal and trivially match nothing.
    pub fn names_with_pieces_under(&self, limit: i64) -> Vec<&str> {
        self.sets()
            .iter()
            .filter(|set| i64::from(set.pieces) < limit)
            .map(|set| set.name.as_str())
            .collect()
    }
}

fn warn_on_duplicate_numbers(sets: &[LegoSet]) {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for set in sets {
        if !seen.insert(set.number.as_str()) {
            log::warn!("catalog contains duplicate set number {}", set.number);
        }
    }
}
