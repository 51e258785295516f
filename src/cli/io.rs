//! JSON I/O handling for CLI
//!
//! - Input: a single JSON document via stdin
//! - Output: a single pretty-printed JSON document via stdout

use std::io::{self, Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Parse one JSON document from a reader
pub fn read_json<T: DeserializeOwned, R: Read>(mut reader: R) -> CliResult<T> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    serde_json::from_str(&input).map_err(|e| CliError::invalid_input(e.to_string()))
}

/// Write a JSON document followed by a newline
pub fn write_json<T: Serialize, W: Write>(mut writer: W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| CliError::io_error(format!("JSON error: {}", e)))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a JSON document to stdout
pub fn write_stdout<T: Serialize>(value: &T) -> CliResult<()> {
    write_json(io::stdout().lock(), value)
}
