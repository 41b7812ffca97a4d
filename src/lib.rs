//! Shared library for the brickset catalog tools.
//!
//! The crate exposes the catalog types (records, repository, query layer) and
//! the path discovery used by the CLI. Public functions here form the contract
//! the binary depends on: catalog resolution honors the `BRICKSET_CATALOG`
//! override before falling back to the bundled data file.

use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod catalog;

pub use catalog::{LegoSet, LoadError, QueryError, Repository, SetCatalog, SetNumber, Theme};

/// Environment override for the catalog location.
pub const CATALOG_ENV: &str = "BRICKSET_CATALOG";

const DEFAULT_CATALOG: &str = "data/brickset.json";

/// Locate the set catalog on disk.
///
/// Search order: honor `BRICKSET_CATALOG` when set (an override that does not
/// name a readable file is an error, not a fallthrough), then look for the
/// bundled catalog under the current directory, then under the build-time
/// manifest directory. Callers can treat failure as fatal because nothing in
/// the crate works without a catalog.
pub fn resolve_catalog_path() -> Result<PathBuf> {
    if let Ok(hint) = env::var(CATALOG_ENV) {
        if !hint.trim().is_empty() {
            let path = PathBuf::from(&hint);
            if path.is_file() {
                return fs::canonicalize(&path)
                    .with_context(|| format!("canonicalizing {CATALOG_ENV}={hint}"));
            }
            bail!("{CATALOG_ENV} points at {hint}, which is not a readable file");
        }
    }

    let local = PathBuf::from(DEFAULT_CATALOG);
    if local.is_file() {
        return Ok(local);
    }

    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CATALOG);
    if bundled.is_file() {
        return Ok(bundled);
    }

    bail!(
        "Unable to locate the set catalog. Set {CATALOG_ENV} to a catalog JSON file or run from the repository root."
    );
}
