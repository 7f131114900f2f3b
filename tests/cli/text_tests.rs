//! Text command tests

use barcode_json::cli::commands::text::{TextArgs, handle_text_convert};
use barcode_json::cli::error::CliError;
use barcode_json::convert::ConvertError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_text_convert() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("items.txt");
    fs::write(&input, "Items No.\tGTIN\nITEM42\t1234567890123\textra\n").unwrap();

    let args = TextArgs {
        input,
        config: None,
    };

    let conversion = handle_text_convert(&args).unwrap();
    assert_eq!(conversion.output, dir.path().join("items.json"));
    assert_eq!(
        conversion.table.get("1234567890123").map(String::as_str),
        Some("ITEM42")
    );
}

#[test]
fn test_cli_text_convert_with_header_markers_from_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("varer.txt");
    let config = dir.path().join("barcode-json.toml");
    fs::write(&input, "Varenr\tStrekkode\nA-1\t111\n").unwrap();
    fs::write(&config, "[text]\nheader_markers = [\"Strekkode\"]\n").unwrap();

    let args = TextArgs {
        input,
        config: Some(config),
    };

    let conversion = handle_text_convert(&args).unwrap();
    assert_eq!(conversion.count(), 1);
}

#[test]
fn test_cli_text_missing_input() {
    let dir = tempdir().unwrap();
    let args = TextArgs {
        input: dir.path().join("missing.txt"),
        config: None,
    };

    let err = handle_text_convert(&args).unwrap_err();
    assert!(matches!(
        err,
        CliError::ConvertError(ConvertError::NotFound(_))
    ));
    assert!(!dir.path().join("missing.json").exists());
}
