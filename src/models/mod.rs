//! Models module
//!
//! Defines the barcode tables produced by the converters and read back by the
//! lookup.

pub mod barcode;

pub use barcode::{BarcodeTable, ItemNumberTable, ProductInfo, ProductTable};
