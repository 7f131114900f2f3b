//! CSV conversion command

use crate::cli::error::CliError;
use crate::config::ConverterConfig;
use crate::convert::Conversion;
use crate::models::ProductInfo;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for `csv-to-barcodes`
#[derive(Debug, Clone, Default)]
pub struct CsvArgs {
    /// Input CSV; the configured default when absent
    pub input: Option<PathBuf>,
    /// Output JSON; the configured default when absent
    pub output: Option<PathBuf>,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
}

/// Handle the CSV conversion command
pub fn handle_csv_convert(args: &CsvArgs) -> Result<Conversion<ProductInfo>, CliError> {
    let config = ConverterConfig::load_or_default(args.config.as_deref())?;

    let input = args.input.clone().unwrap_or_else(|| config.csv.input.clone());
    let output = args.output.clone().unwrap_or_else(|| config.csv.output.clone());
    debug!("Converting {} -> {}", input.display(), output.display());

    let conversion = config.csv_converter().convert(&input, &output)?;
    println!("{}", conversion.summary());
    Ok(conversion)
}
