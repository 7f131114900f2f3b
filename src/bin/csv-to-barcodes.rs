//! CLI binary entry point for csv-to-barcodes

use barcode_json::cli::commands::csv::{CsvArgs, handle_csv_convert};
use barcode_json::cli::logging::init_logging;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv-to-barcodes")]
#[command(about = "Convert a Varenr./Beskrivelse/GTIN spreadsheet export to a barcode JSON mapping")]
#[command(version)]
struct Cli {
    /// Input CSV file (default: "Regneark uten navn - Ark 1.csv")
    input: Option<PathBuf>,
    /// Output JSON file (default: barcodes.json)
    output: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log skipped rows and file operations to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = CsvArgs {
        input: cli.input,
        output: cli.output,
        config: cli.config,
    };

    if let Err(e) = handle_csv_convert(&args) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
