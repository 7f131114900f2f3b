//! Lookup command tests

use barcode_json::cli::commands::lookup::{LookupArgs, LookupLine, handle_lookup};
use barcode_json::cli::error::CliError;
use barcode_json::lookup::LookupError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_lookup_resolves_codes() {
    let dir = tempdir().unwrap();
    let mapping = dir.path().join("barcodes.json");
    fs::write(
        &mapping,
        r#"{"7090001": {"id": "LA-100", "description": "Lakk"}, "7090002": {"id": "LA-200", "description": ""}}"#,
    )
    .unwrap();

    let args = LookupArgs {
        mapping,
        codes: vec![
            "7090001".to_string(),
            "la200".to_string(),
            "404".to_string(),
        ],
    };

    let lines = handle_lookup(&args).unwrap();
    assert_eq!(
        lines,
        vec![
            LookupLine {
                code: "7090001".to_string(),
                id: Some("LA-100".to_string()),
                description: Some("Lakk".to_string()),
            },
            LookupLine {
                code: "la200".to_string(),
                id: Some("LA-200".to_string()),
                description: None,
            },
            LookupLine {
                code: "404".to_string(),
                id: None,
                description: None,
            },
        ]
    );
    assert_eq!(lines[0].to_string(), "7090001\tLA-100\tLakk");
    assert_eq!(lines[2].to_string(), "404\tnot found");
}

#[test]
fn test_cli_lookup_requires_codes() {
    let args = LookupArgs {
        mapping: "barcodes.json".into(),
        codes: Vec::new(),
    };
    assert!(matches!(
        handle_lookup(&args).unwrap_err(),
        CliError::InvalidArgument(_)
    ));
}

#[test]
fn test_cli_lookup_missing_mapping() {
    let dir = tempdir().unwrap();
    let args = LookupArgs {
        mapping: dir.path().join("barcodes.json"),
        codes: vec!["1".to_string()],
    };
    assert!(matches!(
        handle_lookup(&args).unwrap_err(),
        CliError::LookupError(LookupError::NotFound(_))
    ));
}
