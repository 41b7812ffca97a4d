//! Generic load-once store for records deserialized from a JSON array.
//!
//! The repository is polymorphic over any record shape that supports
//! structural deserialization; it holds no domain knowledge. Construction is
//! the only I/O: the source file is read and parsed exactly once, and the
//! collection is never mutated or reloaded afterwards.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Fatal construction failure: the record source could not be turned into a
/// collection. Never retried; callers surface it and stop.
pub enum LoadError {
    #[error("unable to read record source {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record source {} does not match the expected record shape", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory store holding every record from one source file, in source order.
#[derive(Debug)]
pub struct Repository<T> {
    records: Vec<T>,
}

impl<T: DeserializeOwned> Repository<T> {
    /// Deserialize all elements at `path` into the record shape.
    ///
    /// Source order is preserved and duplicates are kept. An empty array is a
    /// legitimate empty repository, not an error.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let data = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<T> = serde_json::from_str(&data).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(Self { records })
    }
}

impl<T> Repository<T> {
    /// The full record collection as a read-only slice, in source order.
    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}
