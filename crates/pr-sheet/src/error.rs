//! Error types for sheet generation.

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while generating or exporting a sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A mechanics error (bad stat mode or attribute).
    #[error(transparent)]
    Mechanics(#[from] pr_mechanics::MechError),

    /// A table error (malformed table or unknown table name).
    #[error(transparent)]
    Table(#[from] pr_tables::TableError),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
