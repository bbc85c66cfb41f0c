use std::path::PathBuf;

use thiserror::Error;

use super::types::RowId;

/// Errors raised by worksheet row-list edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    /// No row carries the requested identifier.
    #[error("unknown row: {0}")]
    UnknownRow(RowId),
    /// The worksheet always keeps at least one row.
    #[error("cannot remove the last remaining row")]
    LastRow,
}

/// Malformed `situation|loss|probability` entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("row entry `{entry}` has {found} fields, expected 3 (situation|loss|probability)")]
    FieldCount { entry: String, found: usize },
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
