//! Barcode lookup command

use crate::cli::error::CliError;
use crate::lookup::BarcodeLookup;
use std::path::PathBuf;

/// Arguments for `barcode-lookup`
#[derive(Debug, Clone)]
pub struct LookupArgs {
    /// Mapping file written by either converter
    pub mapping: PathBuf,
    /// Scanned codes to resolve
    pub codes: Vec<String>,
}

/// Outcome of resolving one scanned code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupLine {
    pub code: String,
    pub id: Option<String>,
    pub description: Option<String>,
}

impl std::fmt::Display for LookupLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.id, &self.description) {
            (Some(id), Some(description)) => write!(f, "{}\t{}\t{}", self.code, id, description),
            (Some(id), None) => write!(f, "{}\t{}", self.code, id),
            (None, _) => write!(f, "{}\tnot found", self.code),
        }
    }
}

/// Handle the lookup command
pub fn handle_lookup(args: &LookupArgs) -> Result<Vec<LookupLine>, CliError> {
    if args.codes.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one code is required".to_string(),
        ));
    }

    let lookup = BarcodeLookup::from_file(&args.mapping)?;
    let lines: Vec<LookupLine> = args
        .codes
        .iter()
        .map(|code| {
            let found = lookup.describe(code.trim());
            LookupLine {
                code: code.clone(),
                id: found.as_ref().map(|m| m.id.to_string()),
                description: found.and_then(|m| m.description.map(str::to_string)),
            }
        })
        .collect();

    for line in &lines {
        println!("{}", line);
    }
    Ok(lines)
}
