//! CLI command implementations

pub mod csv;
pub mod lookup;
pub mod text;
