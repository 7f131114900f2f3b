//! Barcode lookup
//!
//! Resolves scanned codes against a generated mapping file. Both converter
//! outputs are accepted: object values (`{"id", "description"}`) and flat
//! item number strings.
//!
//! A scanned code is resolved in this order:
//! 1. an exact barcode key
//! 2. an exact item number
//! 3. a normalized item number (trimmed, lowercase, no spaces around `-`)
//! 4. a normalized item number with every `-` removed

use crate::models::{BarcodeTable, ProductInfo};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

static RE_DASH_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*-\s*").expect("Invalid regex"));

/// Error loading a mapping file
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Could not find the file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid barcode mapping: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A value in a mapping file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MappingValue {
    Product(ProductInfo),
    ItemNumber(String),
}

impl MappingValue {
    fn into_parts(self) -> (String, Option<String>) {
        match self {
            MappingValue::Product(info) => (info.id, Some(info.description)),
            MappingValue::ItemNumber(id) => (id, None),
        }
    }
}

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMatch<'a> {
    /// Resolved item number
    pub id: &'a str,
    /// Description, when the mapping carries one
    pub description: Option<&'a str>,
}

/// Normalize an item number for comparison
///
/// ```rust
/// use barcode_json::lookup::normalize_product_id;
///
/// assert_eq!(normalize_product_id(" LA - 100 "), "la-100");
/// ```
pub fn normalize_product_id(id: &str) -> String {
    RE_DASH_SPACING
        .replace_all(id.trim(), "-")
        .to_lowercase()
}

/// In-memory index over a barcode mapping
#[derive(Debug, Clone, Default)]
pub struct BarcodeLookup {
    /// barcode -> item number
    barcodes: IndexMap<String, String>,
    /// item number -> description (first non-empty wins)
    products: IndexMap<String, Option<String>>,
    /// normalized or dash-less item number -> item number
    normalized: IndexMap<String, String>,
}

impl BarcodeLookup {
    /// Build a lookup from the JSON text of a mapping file
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        let entries: IndexMap<String, MappingValue> = serde_json::from_str(json)?;
        let mut lookup = Self::default();
        for (barcode, value) in entries {
            let (id, description) = value.into_parts();
            lookup.add(barcode, id, description);
        }
        Ok(lookup)
    }

    /// Load a mapping file written by either converter
    pub fn from_file(path: &Path) -> Result<Self, LookupError> {
        if !path.exists() {
            return Err(LookupError::NotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lookup = Self::from_json(&json)?;
        debug!(
            "Loaded {} barcodes for {} products from {}",
            lookup.barcode_count(),
            lookup.product_count(),
            path.display()
        );
        Ok(lookup)
    }

    /// Build a lookup from a CSV-derived table
    pub fn from_products(table: &BarcodeTable<ProductInfo>) -> Self {
        let mut lookup = Self::default();
        for (barcode, info) in table.iter() {
            lookup.add(
                barcode.to_string(),
                info.id.clone(),
                Some(info.description.clone()),
            );
        }
        lookup
    }

    /// Build a lookup from a text-derived table
    pub fn from_item_numbers(table: &BarcodeTable<String>) -> Self {
        let mut lookup = Self::default();
        for (barcode, id) in table.iter() {
            lookup.add(barcode.to_string(), id.clone(), None);
        }
        lookup
    }

    fn add(&mut self, barcode: String, id: String, description: Option<String>) {
        let description = description.filter(|d| !d.is_empty());
        match self.products.get_mut(&id) {
            Some(existing) => {
                if existing.is_none() {
                    *existing = description;
                }
            }
            None => {
                let normalized = normalize_product_id(&id);
                let dashless = normalized.replace('-', "");
                self.normalized.entry(normalized).or_insert_with(|| id.clone());
                self.normalized.entry(dashless).or_insert_with(|| id.clone());
                self.products.insert(id.clone(), description);
            }
        }
        self.barcodes.insert(barcode, id);
    }

    pub fn barcode_count(&self) -> usize {
        self.barcodes.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Resolve a scanned code to an item number
    pub fn resolve(&self, code: &str) -> Option<&str> {
        if code.is_empty() {
            return None;
        }
        if let Some(id) = self.barcodes.get(code) {
            return Some(id.as_str());
        }
        if let Some((id, _)) = self.products.get_key_value(code) {
            return Some(id.as_str());
        }

        let normalized = normalize_product_id(code);
        self.normalized
            .get(&normalized)
            .or_else(|| self.normalized.get(&normalized.replace('-', "")))
            .map(String::as_str)
    }

    /// Resolve a scanned code and attach the product description
    pub fn describe(&self, code: &str) -> Option<ProductMatch<'_>> {
        let id = self.resolve(code)?;
        let description = self.products.get(id).and_then(|d| d.as_deref());
        Some(ProductMatch { id, description })
    }
}
