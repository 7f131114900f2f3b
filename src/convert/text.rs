//! Text converter
//!
//! Reads a plain-text item export (`<item no>  <barcode>  ...` per line) and
//! produces `barcode -> item number`. Exports mix tabs and runs of spaces, so
//! a field boundary is either one or more tabs or two or more spaces.

use super::{Conversion, ConvertError, ConvertResult, JsonEscaping, ensure_input_exists};
use crate::models::ItemNumberTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static RE_FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t+| {2,}").expect("Invalid regex"));

/// Substrings that mark the first line as a header
pub const DEFAULT_HEADER_MARKERS: [&str; 2] = ["Items No.", "GTIN"];

/// Output path for a text export: the input path with a `.json` extension
///
/// ```rust
/// use barcode_json::convert::text::output_path_for;
/// use std::path::Path;
///
/// assert_eq!(output_path_for(Path::new("exports/items.txt")), Path::new("exports/items.json"));
/// assert_eq!(output_path_for(Path::new("items")), Path::new("items.json"));
/// ```
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Text converter producing `ItemNumberTable`s
#[derive(Debug, Clone)]
pub struct TextConverter {
    header_markers: Vec<String>,
}

impl Default for TextConverter {
    fn default() -> Self {
        Self::with_header_markers(DEFAULT_HEADER_MARKERS)
    }
}

impl TextConverter {
    /// Create a converter using the `Items No.`/`GTIN` header markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom header markers
    pub fn with_header_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header_markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn header_markers(&self) -> &[String] {
        &self.header_markers
    }

    /// True when `line` contains any header marker
    fn is_header(&self, line: &str) -> bool {
        self.header_markers
            .iter()
            .any(|marker| !marker.is_empty() && line.contains(marker.as_str()))
    }

    /// Parse text content into an item number table
    ///
    /// The first line is dropped when it looks like a header. Every other
    /// non-blank line contributes its first two fields as item number and
    /// barcode; extra fields are ignored and lines where either field is
    /// empty are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use barcode_json::convert::TextConverter;
    ///
    /// let text = "Items No.\tGTIN\nITEM42\t1234567890123\textra\n";
    /// let table = TextConverter::new().parse(text);
    /// assert_eq!(table.get("1234567890123").map(String::as_str), Some("ITEM42"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn parse(&self, content: &str) -> ItemNumberTable {
        let mut lines = content.lines().enumerate();
        if let Some(first) = content.lines().next().filter(|line| self.is_header(line)) {
            debug!("Dropping header line: {}", first);
            lines.next();
        }

        let mut table = ItemNumberTable::new();
        for (index, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = RE_FIELD_SEPARATOR.split(line).map(str::trim);
            let (Some(item_no), Some(barcode)) = (fields.next(), fields.next()) else {
                debug!("Skipping line {}: fewer than two fields", index + 1);
                continue;
            };
            if item_no.is_empty() || barcode.is_empty() {
                debug!("Skipping line {}: empty item number or barcode", index + 1);
                continue;
            }

            table.insert(barcode, item_no.to_string());
        }

        table
    }

    /// Convert the text file at `input`, writing next to it as `<stem>.json`
    pub fn convert(&self, input: &Path) -> ConvertResult<Conversion<String>> {
        self.convert_to(input, &output_path_for(input))
    }

    /// Convert the text file at `input` and write the table to `output`
    ///
    /// Nothing is written when the input is missing or unreadable.
    pub fn convert_to(&self, input: &Path, output: &Path) -> ConvertResult<Conversion<String>> {
        ensure_input_exists(input)?;

        let content = std::fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
        let table = self.parse(&content);
        info!(
            "Parsed {} barcodes from {}",
            table.len(),
            input.display()
        );

        super::write_json_file(output, &table, JsonEscaping::Ascii)?;

        Ok(Conversion {
            table,
            output: output.to_path_buf(),
        })
    }
}
