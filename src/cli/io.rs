//! JSON I/O handling for CLI
//!
//! - Input: plan JSON from a file or stdin
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read plan text from `path`, or all of stdin when no path is given
pub fn read_plan_text(path: Option<&Path>) -> CliResult<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read plan '{}': {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::io_error("Empty plan input"));
    }
    Ok(text)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_response_to(&mut stdout, data)?;
    stdout.flush()?;
    Ok(())
}

/// Write a success response envelope to any writer
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_response_envelope() {
        let mut out = Vec::new();
        write_response_to(&mut out, json!({"ids": ["1", "2"]})).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(line, "{\"data\":{\"ids\":[\"1\",\"2\"]},\"status\":\"ok\"}\n");
    }

    #[test]
    fn test_read_plan_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, r#"{"operation": "include"}"#).unwrap();

        assert_eq!(
            read_plan_text(Some(&path)).unwrap(),
            r#"{"operation": "include"}"#
        );
    }

    #[test]
    fn test_read_plan_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "  \n").unwrap();

        assert!(read_plan_text(Some(&path)).is_err());
    }
}
