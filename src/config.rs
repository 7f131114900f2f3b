//! Converter configuration file support
//!
//! Handles parsing of TOML configuration files. Every field is optional; an
//! absent file section or key falls back to the built-in behaviour.

use crate::convert::csv::{BARCODE_COLUMN, DESCRIPTION_COLUMN, ID_COLUMN};
use crate::convert::text::DEFAULT_HEADER_MARKERS;
use crate::convert::{CsvColumns, CsvConverter, TextConverter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default CSV input filename (the spreadsheet's default export name)
pub const DEFAULT_CSV_INPUT: &str = "Regneark uten navn - Ark 1.csv";

/// Default CSV output filename
pub const DEFAULT_CSV_OUTPUT: &str = "barcodes.json";

/// Error loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Config error: {0}")]
    ParseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// CSV converter section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvSection {
    /// Input file used when none is given
    #[serde(default = "default_csv_input")]
    pub input: PathBuf,

    /// Output file used when none is given
    #[serde(default = "default_csv_output")]
    pub output: PathBuf,

    /// Header of the item number column
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Header of the description column
    #[serde(default = "default_description_column")]
    pub description_column: String,

    /// Header of the barcode column
    #[serde(default = "default_barcode_column")]
    pub barcode_column: String,
}

fn default_csv_input() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_INPUT)
}

fn default_csv_output() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_OUTPUT)
}

fn default_id_column() -> String {
    ID_COLUMN.to_string()
}

fn default_description_column() -> String {
    DESCRIPTION_COLUMN.to_string()
}

fn default_barcode_column() -> String {
    BARCODE_COLUMN.to_string()
}

impl Default for CsvSection {
    fn default() -> Self {
        Self {
            input: default_csv_input(),
            output: default_csv_output(),
            id_column: default_id_column(),
            description_column: default_description_column(),
            barcode_column: default_barcode_column(),
        }
    }
}

impl CsvSection {
    pub fn columns(&self) -> CsvColumns {
        CsvColumns {
            id: self.id_column.clone(),
            description: self.description_column.clone(),
            barcode: self.barcode_column.clone(),
        }
    }
}

/// Text converter section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSection {
    /// A first line containing any of these is treated as a header
    #[serde(default = "default_header_markers")]
    pub header_markers: Vec<String>,
}

fn default_header_markers() -> Vec<String> {
    DEFAULT_HEADER_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl Default for TextSection {
    fn default() -> Self {
        Self {
            header_markers: default_header_markers(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConverterConfig {
    /// CSV converter configuration
    #[serde(default)]
    pub csv: CsvSection,

    /// Text converter configuration
    #[serde(default)]
    pub text: TextSection,
}

impl ConverterConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Load configuration from `path`, or the defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> ConfigResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config: {}", e)))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })
    }

    /// Build a CSV converter for this configuration
    pub fn csv_converter(&self) -> CsvConverter {
        CsvConverter::with_columns(self.csv.columns())
    }

    /// Build a text converter for this configuration
    pub fn text_converter(&self) -> TextConverter {
        TextConverter::with_header_markers(self.text.header_markers.iter().cloned())
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Barcode JSON converter configuration

[csv]
# Input used when csv-to-barcodes is run without arguments
input = "Regneark uten navn - Ark 1.csv"
# Output used when no output path is given
output = "barcodes.json"

# Exact (case-sensitive) header names of the required columns
id_column = "Varenr."
description_column = "Beskrivelse"
barcode_column = "GTIN"

[text]
# A first line containing any of these substrings is skipped as a header
header_markers = ["Items No.", "GTIN"]
"#
}
