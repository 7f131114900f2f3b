//! Interactive input prompt

use crate::cli::error::CliError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt shown by `text-to-barcodes`; the filename is only an example
pub const TEXT_INPUT_PROMPT: &str = "Enter the path of the text file to convert (e.g. items.txt): ";

/// Write `message` to `output` and read one path from `input`
///
/// Surrounding whitespace and quotes (as added by drag-and-drop into a
/// terminal) are stripped. An empty answer is an error.
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<PathBuf, CliError> {
    write!(output, "{}", message).map_err(|e| CliError::PromptError(e.to_string()))?;
    output
        .flush()
        .map_err(|e| CliError::PromptError(e.to_string()))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CliError::PromptError(e.to_string()))?;

    let answer = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if answer.is_empty() {
        return Err(CliError::InvalidArgument("No input file given".to_string()));
    }
    Ok(PathBuf::from(answer))
}

/// Use `given` when present, otherwise ask on stdin
pub fn input_path_or_prompt(given: Option<PathBuf>, message: &str) -> Result<PathBuf, CliError> {
    match given {
        Some(path) => Ok(path),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_for_path(&mut stdin.lock(), &mut stdout.lock(), message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_trimmed_path() {
        let mut input = "  data/items.txt \n".as_bytes();
        let mut output = Vec::new();
        let path = prompt_for_path(&mut input, &mut output, TEXT_INPUT_PROMPT).unwrap();

        assert_eq!(path, PathBuf::from("data/items.txt"));
        assert_eq!(String::from_utf8(output).unwrap(), TEXT_INPUT_PROMPT);
    }

    #[test]
    fn test_prompt_strips_quotes() {
        let mut input = "'/tmp/my items.txt'\n".as_bytes();
        let path = prompt_for_path(&mut input, &mut Vec::<u8>::new(), "> ").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/my items.txt"));
    }

    #[test]
    fn test_prompt_empty_answer() {
        let mut input = "\n".as_bytes();
        let err = prompt_for_path(&mut input, &mut Vec::<u8>::new(), "> ").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));

        let mut eof = "".as_bytes();
        assert!(prompt_for_path(&mut eof, &mut Vec::<u8>::new(), "> ").is_err());
    }

    #[test]
    fn test_given_path_skips_prompt() {
        let path = input_path_or_prompt(Some(PathBuf::from("x.txt")), "> ").unwrap();
        assert_eq!(path, PathBuf::from("x.txt"));
    }
}
