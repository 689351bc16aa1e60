//! Error types for loading renaming tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a renaming-table load.
///
/// Malformed lines never fail a load; they are counted on the tables instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The mapping file could not be opened or read.
    #[error("failed to read mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a caller-supplied reader failed.
    #[error("failed to read mappings: {0}")]
    Read(#[from] std::io::Error),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
