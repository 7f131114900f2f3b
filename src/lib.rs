//! Barcode JSON - converters from product spreadsheets to barcode lookup tables
//!
//! Provides:
//! - CSV conversion (`Varenr.`, `Beskrivelse`, `GTIN` columns) to `barcode -> {id, description}`
//! - Tab/space delimited text conversion to `barcode -> item number`
//! - Lookup of scanned codes against a generated mapping file
//! - Converter configuration (TOML)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod lookup;
pub mod models;

pub use config::{ConfigError, ConverterConfig};
pub use convert::{
    Conversion, ConvertError, ConvertResult, CsvColumns, CsvConverter, JsonEscaping,
    TextConverter,
};
pub use lookup::{BarcodeLookup, LookupError, ProductMatch};
pub use models::{BarcodeTable, ItemNumberTable, ProductInfo, ProductTable};
