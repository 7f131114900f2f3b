//! CSV command tests

use barcode_json::cli::commands::csv::{CsvArgs, handle_csv_convert};
use barcode_json::cli::error::CliError;
use barcode_json::convert::ConvertError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cli_csv_convert_explicit_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("varer.csv");
    let output = dir.path().join("out.json");
    fs::write(&input, "Varenr.,Beskrivelse,GTIN\n100-01,Hammer,7090001\n").unwrap();

    let args = CsvArgs {
        input: Some(input),
        output: Some(output.clone()),
        config: None,
    };

    let conversion = handle_csv_convert(&args).unwrap();
    assert_eq!(conversion.count(), 1);
    assert!(output.exists());
}

#[test]
fn test_cli_csv_convert_uses_config_defaults() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let output = dir.path().join("lookup.json");
    let config = dir.path().join("barcode-json.toml");
    fs::write(&input, "Item,Text,EAN\nI-1,Widget,555\n").unwrap();
    fs::write(
        &config,
        format!(
            "[csv]\ninput = {:?}\noutput = {:?}\nid_column = \"Item\"\ndescription_column = \"Text\"\nbarcode_column = \"EAN\"\n",
            input.display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    let args = CsvArgs {
        config: Some(config),
        ..Default::default()
    };

    let conversion = handle_csv_convert(&args).unwrap();
    assert_eq!(conversion.output, output);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"555": {"id": "I-1", "description": "Widget"}})
    );
}

#[test]
fn test_cli_csv_missing_input() {
    let dir = tempdir().unwrap();
    let args = CsvArgs {
        input: Some(dir.path().join("missing.csv")),
        output: Some(dir.path().join("out.json")),
        config: None,
    };

    let err = handle_csv_convert(&args).unwrap_err();
    assert!(matches!(
        err,
        CliError::ConvertError(ConvertError::NotFound(_))
    ));
    assert!(err.to_string().starts_with("Could not find the file"));
}

#[test]
fn test_cli_csv_bad_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[csv\n").unwrap();

    let args = CsvArgs {
        config: Some(config),
        ..Default::default()
    };

    let err = handle_csv_convert(&args).unwrap_err();
    assert!(matches!(err, CliError::ConfigError(_)));
}
