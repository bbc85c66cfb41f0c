//! Core domain types, lenient entry parsing, error types and serialization helpers.

pub mod entry;
pub mod error;
pub mod serialization;
pub mod types;

pub use entry::{ENTRY_SEPARATOR, RowEntry, parse_numeric_entry};
pub use error::{ConfigError, EntryError, WorksheetError};
pub use serialization::{from_json, to_json_pretty};
pub use types::*;
