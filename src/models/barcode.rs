//! Barcode tables
//!
//! A barcode table maps a barcode (GTIN) to whatever the converter knows about
//! the product behind it:
//! - CSV exports carry an item number and a description (`ProductTable`)
//! - text exports carry only the item number (`ItemNumberTable`)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Product metadata stored per barcode in CSV-derived tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Item number (`Varenr.`)
    pub id: String,
    /// Free-text description (`Beskrivelse`), may be empty
    #[serde(default)]
    pub description: String,
}

impl ProductInfo {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Insertion-ordered mapping from barcode to `V`
///
/// Inserting a barcode that is already present replaces its value but keeps
/// the position of the first insertion, so the serialized order follows the
/// first appearance of each barcode in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarcodeTable<V> {
    entries: IndexMap<String, V>,
}

/// Barcode table produced by the CSV converter
pub type ProductTable = BarcodeTable<ProductInfo>;

/// Barcode table produced by the text converter
pub type ItemNumberTable = BarcodeTable<String>;

impl<V> Default for BarcodeTable<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> BarcodeTable<V> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `barcode`, returning the replaced value
    pub fn insert(&mut self, barcode: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(barcode.into(), value)
    }

    pub fn get(&self, barcode: &str) -> Option<&V> {
        self.entries.get(barcode)
    }

    pub fn contains(&self, barcode: &str) -> bool {
        self.entries.contains_key(barcode)
    }

    /// Number of distinct barcodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(barcode, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(barcode, value)| (barcode.as_str(), value))
    }

    /// Barcodes in table order
    pub fn barcodes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<V> FromIterator<(String, V)> for BarcodeTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (barcode, value) in iter {
            table.insert(barcode, value);
        }
        table
    }
}
