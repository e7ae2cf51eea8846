//! Error types for gradecurve.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gradecurve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while adjusting a roster.
#[derive(Debug, Error)]
pub enum Error {
    /// No input file was given on the command line.
    #[error("No input file specified")]
    InputMissing,

    /// The input workbook could not be opened or parsed.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The output workbook could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// A numeric cell failed to parse and the cell policy rejects it.
    #[error("Malformed cell at row {row}, column {column}: {value:?}")]
    MalformedCell {
        /// One-based row number as shown by spreadsheet tools.
        row: usize,
        column: &'static str,
        value: String,
    },

    /// Input that cannot be processed, such as an empty roster.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plain I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
