//! Text conversion command

use crate::cli::error::CliError;
use crate::config::ConverterConfig;
use crate::convert::Conversion;
use std::path::PathBuf;

/// Arguments for `text-to-barcodes`
#[derive(Debug, Clone)]
pub struct TextArgs {
    /// Input text file; the output is written next to it as `<stem>.json`
    pub input: PathBuf,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
}

/// Handle the text conversion command
pub fn handle_text_convert(args: &TextArgs) -> Result<Conversion<String>, CliError> {
    let config = ConverterConfig::load_or_default(args.config.as_deref())?;

    let conversion = config.text_converter().convert(&args.input)?;
    println!("{}", conversion.summary());
    Ok(conversion)
}
