//! Command-line layer
//!
//! Argument structs and `handle_*` functions for the binaries, plus the
//! interactive prompt and logging setup they share.

pub mod commands;
pub mod error;
pub mod logging;
pub mod prompt;
