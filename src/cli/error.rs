//! CLI-specific error types

use crate::config::ConfigError;
use crate::convert::ConvertError;
use crate::lookup::LookupError;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    ConvertError(#[from] ConvertError),

    #[error("{0}")]
    LookupError(#[from] LookupError),

    #[error("{0}")]
    ConfigError(#[from] ConfigError),

    #[error("Failed to read input path: {0}")]
    PromptError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
