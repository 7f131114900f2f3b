//! CLI binary entry point for text-to-barcodes

use barcode_json::cli::commands::text::{TextArgs, handle_text_convert};
use barcode_json::cli::error::CliError;
use barcode_json::cli::logging::init_logging;
use barcode_json::cli::prompt::{TEXT_INPUT_PROMPT, input_path_or_prompt};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "text-to-barcodes")]
#[command(about = "Convert a tab/space delimited item export to a barcode JSON mapping")]
#[command(version)]
struct Cli {
    /// Input text file; asked for interactively when omitted
    input: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log skipped lines and file operations to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = input_path_or_prompt(cli.input, TEXT_INPUT_PROMPT)?;
    let args = TextArgs {
        input,
        config: cli.config,
    };
    let _ = handle_text_convert(&args)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
