//! Function Files
//!
//! Each non-empty line holds the values of one function, sampled at
//! consecutive positions. Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::tokens;
use crate::error::{Error, Result};

const SEPARATORS: &[char] = &[':', ';', ','];

/// Parse the values of a single line. `line_number` is only used for
/// error reporting.
pub fn parse_function_line(line: &str, line_number: usize) -> Result<Vec<f64>> {
    tokens(line, SEPARATORS)
        .map(|token| {
            token.parse::<f64>().map_err(|_| Error::Conversion {
                token: token.to_string(),
                line: line_number,
            })
        })
        .collect()
}

/// Read all functions from a reader, one per line
pub fn read_functions<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut functions = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        functions.push(parse_function_line(trimmed, i + 1)?);
    }

    tracing::debug!(functions = functions.len(), "Read function values");
    Ok(functions)
}

/// Read all functions from a file
pub fn load_functions(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path)?;
    read_functions(BufReader::new(file))
}
