// src/export.rs
//! Reader for the game's "print to text" export of the Staff Search page.
//!
//! The export is a pipe-bordered table:
//!
//! ```text
//! | Inf | Name          | Att | Def | ... |
//! | ------------------------------------- |
//! |     | Jan Kowalski  | 12  | 9   | ... |
//! ```
//!
//! `|` is both the border and the field delimiter, so a row is the split
//! between the first and last `|`. Banner lines, rules and blank lines are
//! dropped by content, not by position.

use std::{fs, path::Path};

use tracing::debug;

use crate::core::sanitize::{is_rule, strip_decorators};
use crate::error::{LoadError, ParseError};

/// Rectangular table of trimmed string cells, straight from the export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

/// Read the export file as text. A leading byte-order mark is dropped.
pub fn read_export(path: &Path) -> Result<String, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => s!(rest),
        None => text,
    })
}

pub fn load_export(path: &Path) -> Result<RawTable, LoadError> {
    let text = read_export(path)?;
    parse_export(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse export text. The first table line is the header row; every later
/// table line must have exactly as many cells.
pub fn parse_export(text: &str) -> Result<RawTable, ParseError> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (ix, line) in text.lines().enumerate() {
        let Some(cells) = table_cells(line) else {
            skipped += 1;
            continue;
        };

        match &headers {
            None => headers = Some(cells),
            Some(h) => {
                if cells.len() != h.len() {
                    return Err(ParseError::Ragged {
                        line: ix + 1,
                        expected: h.len(),
                        found: cells.len(),
                    });
                }
                rows.push(cells);
            }
        }
    }

    let headers = headers.ok_or(ParseError::NoHeader)?;
    debug!(
        "Export: {} header cells, {} rows, {} decorative lines skipped",
        headers.len(),
        rows.len(),
        skipped
    );
    Ok(RawTable { headers, rows })
}

/// Cells of one line, or None when the line is decoration.
///
/// A table line has at least two cells between its outer borders, and at
/// least two of them carry something other than rule characters.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let line = strip_decorators(line);
    let tokens: Vec<&str> = line.split('|').collect();
    if tokens.len() < 4 {
        return None;
    }

    let cells: Vec<String> = tokens[1..tokens.len() - 1]
        .iter()
        .map(|t| t.trim().to_string())
        .collect();

    let content = cells
        .iter()
        .filter(|c| !c.is_empty() && !is_rule(c))
        .count();
    if content < 2 {
        return None;
    }
    Some(cells)
}
