//! CLI tests module

pub mod csv_tests;
pub mod lookup_tests;
pub mod text_tests;
