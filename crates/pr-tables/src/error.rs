//! Error types for table lookups.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while resolving tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// A roll matched no entry: the table does not cover 1-100.
    #[error("roll {roll} matches no entry in table '{table}'")]
    NoMatch {
        /// The table that was searched.
        table: &'static str,
        /// The roll that fell through.
        roll: u32,
    },

    /// A roll is covered by zero or several entries.
    #[error("roll {roll} matches {matches} entries in table '{table}' (expected exactly 1)")]
    Partition {
        /// The malformed table.
        table: &'static str,
        /// The offending roll.
        roll: u32,
        /// How many entries contain it.
        matches: usize,
    },

    /// An entry's interval is empty or leaves 1-100.
    #[error("entry '{label}' in table '{table}' has invalid range {low}-{high}")]
    BadEntry {
        /// The malformed table.
        table: &'static str,
        /// The entry label.
        label: &'static str,
        /// Interval start.
        low: u32,
        /// Interval end.
        high: u32,
    },

    /// No finance rule exists for a background.
    #[error("no finance rule configured for background '{0}'")]
    UnconfiguredBackground(String),

    /// No table is registered under the given name.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// An animal category has no sub-table.
    #[error("unknown animal category: {0}")]
    UnknownCategory(String),
}
