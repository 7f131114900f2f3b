//! CLI binary entry point for barcode-lookup

use barcode_json::cli::commands::lookup::{LookupArgs, handle_lookup};
use barcode_json::cli::logging::init_logging;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barcode-lookup")]
#[command(about = "Resolve scanned barcodes or item numbers against a barcode JSON mapping")]
#[command(version)]
struct Cli {
    /// Mapping file written by csv-to-barcodes or text-to-barcodes
    mapping: PathBuf,
    /// Scanned codes to resolve
    #[arg(required = true)]
    codes: Vec<String>,
    /// Log lookup details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = LookupArgs {
        mapping: cli.mapping,
        codes: cli.codes,
    };

    if let Err(e) = handle_lookup(&args) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
