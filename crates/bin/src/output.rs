//! Reading input documents and printing JSON output.

use std::{
    io::{self, Read},
    path::Path,
};

use arbor::Value;
use serde::Serialize;

/// Output layout selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

impl OutputFormat {
    pub fn from_flag(compact: bool) -> Self {
        if compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Reads a JSON document from `path`, or from stdin for `None` and `-`.
pub fn read_document(path: Option<&Path>) -> Result<Value, Box<dyn std::error::Error>> {
    let text = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    parse_document(&text)
}

/// Parses a JSON document into a tree.
pub fn parse_document(text: &str) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a value given on the command line.
///
/// Anything that is not valid JSON is taken as plain text, so `sw0` does
/// not need quoting.
pub fn parse_cli_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::from(text))
}

/// Prints `value` as JSON on stdout.
pub fn print_json(value: &impl Serialize, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_values() {
        assert_eq!(parse_cli_value("48"), Value::Int(48));
        assert_eq!(parse_cli_value("true"), Value::Bool(true));
        assert_eq!(parse_cli_value("\"48\""), Value::from("48"));
        assert_eq!(parse_cli_value("sw0"), Value::from("sw0"));
        assert!(parse_cli_value(r#"{"a": [1]}"#).as_map().is_some());
    }

    #[test]
    fn test_read_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{"id": "top"}"#).unwrap();

        let doc = read_document(Some(path.as_path())).unwrap();
        assert_eq!(doc.as_map().and_then(|m| m.get("id")), Some(&Value::from("top")));

        let missing = read_document(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(missing.to_string().contains("nope.json"));
    }

    #[test]
    fn test_parse_document_rejects_garbage() {
        assert!(parse_document("{not json").is_err());
    }
}
