//! Errors raised while loading dex data and configuration.
//!
//! Resolution itself never fails; unknown identifiers degrade to placeholder
//! records. Only getting the raw tables and config into memory can go wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Data loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DexError {
    /// A data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A data file was not valid JSON for its table
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Inline JSON handed to a `from_json` constructor was malformed
    #[error("failed to parse {table} table: {source}")]
    Table {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// Configuration problem
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

pub type Result<T, E = DexError> = std::result::Result<T, E>;
