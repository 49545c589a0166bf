//! Error types for reference table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for reference store operations.
pub type RefStoreResult<T> = Result<T, RefStoreError>;

/// Errors that can occur while loading reference tables.
#[derive(Error, Debug)]
pub enum RefStoreError {
    #[error("Reference directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Reference table not found: {0}")]
    TableNotFound(PathBuf),

    #[error("Malformed row in {table} (row {row}): expected {expected} columns ({columns}), found {found}")]
    MalformedRow {
        table: String,
        row: usize,
        expected: usize,
        columns: String,
        found: usize,
    },

    #[error("Empty value in {table} (row {row}, column '{column}')")]
    EmptyColumn {
        table: String,
        row: usize,
        column: String,
    },

    #[error("Reference table {table} is empty")]
    EmptyTable { table: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}
