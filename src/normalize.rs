// src/normalize.rs
//! Raw export cells → typed `StaffTable`.

use tracing::debug;

use crate::attributes;
use crate::error::NormalizationError;
use crate::export::RawTable;
use crate::table::{Column, StaffTable};

/// Clean a freshly parsed export:
/// - unnamed placeholder columns at either edge are dropped
/// - headers and cells are trimmed
/// - rows with every attribute cell empty are dropped
/// - attribute columns become integers; anything else stays text
pub fn normalize(raw: RawTable) -> Result<StaffTable, NormalizationError> {
    let RawTable { mut headers, mut rows } = raw;

    for h in &mut headers {
        *h = s!(h.trim());
    }
    for row in &mut rows {
        for cell in row.iter_mut() {
            if cell.trim().len() != cell.len() {
                *cell = s!(cell.trim());
            }
        }
    }

    drop_placeholder_columns(&mut headers, &mut rows);

    let attr_ix: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| attributes::is_attribute(h))
        .map(|(i, _)| i)
        .collect();

    // Keep the 1-based source row number for error messages.
    let mut numbered: Vec<(usize, Vec<String>)> =
        rows.into_iter().enumerate().map(|(i, r)| (i + 1, r)).collect();

    if !attr_ix.is_empty() {
        let before = numbered.len();
        numbered.retain(|(_, row)| {
            attr_ix
                .iter()
                .any(|&ci| row.get(ci).is_some_and(|c| !c.is_empty()))
        });
        let dropped = before - numbered.len();
        if dropped > 0 {
            debug!("Normalize: dropped {dropped} row(s) with no attribute values");
        }
    }

    build_typed(headers, numbered)
}

/// Type already-clean columns: attribute headers → integers, the rest → text.
/// Used for fresh exports (after cleaning) and for cache reloads.
pub fn type_columns(
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<StaffTable, NormalizationError> {
    let numbered = rows.into_iter().enumerate().map(|(i, r)| (i + 1, r)).collect();
    build_typed(headers, numbered)
}

fn build_typed(
    headers: Vec<String>,
    rows: Vec<(usize, Vec<String>)>,
) -> Result<StaffTable, NormalizationError> {
    let mut columns = Vec::with_capacity(headers.len());

    for (ci, name) in headers.into_iter().enumerate() {
        let cells = rows.iter().map(|(n, row)| (*n, row.get(ci).map(String::as_str).unwrap_or("")));

        let column = if attributes::is_attribute(&name) {
            let mut values = Vec::with_capacity(rows.len());
            for (row_no, cell) in cells {
                values.push(parse_int(cell).map_err(|_| NormalizationError {
                    column: name.clone(),
                    row: row_no,
                    value: s!(cell),
                })?);
            }
            Column::int(name, values)
        } else {
            Column::text(name, cells.map(|(_, c)| s!(c)).collect())
        };
        columns.push(column);
    }

    Ok(StaffTable::from_columns(columns))
}

/// Empty → None; anything else must be a (possibly signed) integer.
fn parse_int(cell: &str) -> Result<Option<i64>, std::num::ParseIntError> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<i64>().map(Some)
}

fn drop_placeholder_columns(headers: &mut Vec<String>, rows: &mut [Vec<String>]) {
    if headers.last().is_some_and(|h| h.is_empty()) {
        let last = headers.len() - 1;
        headers.pop();
        for row in rows.iter_mut() {
            if row.len() > last {
                row.truncate(last);
            }
        }
        debug!("Normalize: dropped trailing placeholder column");
    }
    if headers.first().is_some_and(|h| h.is_empty()) {
        headers.remove(0);
        for row in rows.iter_mut() {
            if !row.is_empty() {
                row.remove(0);
            }
        }
        debug!("Normalize: dropped leading placeholder column");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_accept_signs_and_blanks() {
        assert_eq!(parse_int("").unwrap(), None);
        assert_eq!(parse_int("-4").unwrap(), Some(-4));
        assert_eq!(parse_int("+25").unwrap(), Some(25));
        assert!(parse_int("12.5").is_err());
    }

    #[test]
    fn single_unnamed_column_is_dropped_once() {
        let mut headers = strings![""];
        let mut rows = vec![strings!["x"]];
        drop_placeholder_columns(&mut headers, &mut rows);
        assert!(headers.is_empty());
        assert!(rows[0].is_empty());
    }
}
