//! Barcode converters
//!
//! Each converter reads one flat file, keeps the rows that carry a usable
//! barcode and writes the resulting table as a single JSON document:
//! - `CsvConverter`: header-bearing CSV, `barcode -> {id, description}`
//! - `TextConverter`: tab/space delimited text, `barcode -> item number`

pub mod csv;
pub mod text;
pub mod writer;

use crate::models::BarcodeTable;
use std::path::{Path, PathBuf};

pub use self::csv::{CsvColumns, CsvConverter};
pub use text::TextConverter;
pub use writer::{JsonEscaping, to_pretty_json, write_json_file};

/// Error during conversion
///
/// Every failure is terminal for the run. Rows that are merely incomplete are
/// not errors; they are dropped while parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Could not find the file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("CSV file is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Outcome of a successful conversion run
#[derive(Debug, Clone, PartialEq)]
#[must_use = "conversion results carry the table that was written"]
pub struct Conversion<V> {
    /// The table that was written
    pub table: BarcodeTable<V>,
    /// Where it was written
    pub output: PathBuf,
}

impl<V> Conversion<V> {
    /// Number of barcodes written
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Human-readable one-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Converted {} barcodes to JSON in {}",
            self.count(),
            self.output.display()
        )
    }
}

/// Fail with `NotFound` before anything is read or written
pub(crate) fn ensure_input_exists(input: &Path) -> ConvertResult<()> {
    if input.exists() {
        Ok(())
    } else {
        Err(ConvertError::NotFound(input.to_path_buf()))
    }
}
