//! Error types for the statement reshaper library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or reshaping a statement.
///
/// Malformed cells are not errors: amounts fall back to `0.0` and dates to a
/// missing value. Only I/O and structural problems surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing or writing CSV.
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// The input table lacks one or more required columns.
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Invalid date format.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Unknown output format or option value.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
