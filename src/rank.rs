// src/rank.rs
//! Top-N selection over a scored table.

use std::cmp::Ordering;

use crate::attributes::NAME;
use crate::error::ColumnNotFoundError;
use crate::table::{StaffTable, Value};

/// Ranked rows restricted to the requested columns. This is the shape every
/// renderer (console, HTML, CSV, GUI table) consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Column the rows were ranked by.
    pub sort_by: String,
}

impl Report {
    pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of one column, top row first.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let ix = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|r| r.get(ix)).collect())
    }

    /// Per column: true when every present cell is an integer.
    pub fn numeric_columns(&self) -> Vec<bool> {
        (0..self.ncols())
            .map(|ci| {
                let mut seen = false;
                for row in &self.rows {
                    match row.get(ci) {
                        Some(Value::Int(_)) => seen = true,
                        Some(Value::Text(_)) => return false,
                        _ => {}
                    }
                }
                seen
            })
            .collect()
    }

    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Value::to_string).collect())
            .collect()
    }
}

/// The `n` best rows by `metric`, highest first.
///
/// The sort is stable: equal values keep table order. Missing values go last.
/// Output columns are `columns` followed by `Name` (unless already listed).
/// `n` larger than the table simply returns every row.
pub fn top_n(
    table: &StaffTable,
    metric: &str,
    n: usize,
    columns: &[String],
) -> Result<Report, ColumnNotFoundError> {
    let metric_ix = table
        .position(metric)
        .ok_or_else(|| ColumnNotFoundError(s!(metric)))?;

    let mut headers: Vec<String> = columns.to_vec();
    if !headers.iter().any(|h| h == NAME) {
        headers.push(s!(NAME));
    }
    let col_ix = headers
        .iter()
        .map(|h| table.position(h).ok_or_else(|| ColumnNotFoundError(h.clone())))
        .collect::<Result<Vec<usize>, _>>()?;

    let keys: Vec<Value> = (0..table.len()).map(|r| table.value(r, metric_ix)).collect();
    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by(|&a, &b| descending(&keys[a], &keys[b]));

    let rows = order
        .into_iter()
        .take(n)
        .map(|r| col_ix.iter().map(|&c| table.value(r, c)).collect())
        .collect();

    Ok(Report { headers, rows, sort_by: s!(metric) })
}

fn descending(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Missing, Value::Missing) => Ordering::Equal,
        (Value::Missing, _) => Ordering::Greater,
        (_, Value::Missing) => Ordering::Less,
        (Value::Int(x), Value::Int(y)) => y.cmp(x),
        (Value::Text(x), Value::Text(y)) => y.cmp(x),
        // One column never mixes types.
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sorts_after_everything() {
        assert_eq!(descending(&Value::Missing, &Value::Int(i64::MIN)), Ordering::Greater);
        assert_eq!(descending(&Value::Int(3), &Value::Int(5)), Ordering::Greater);
        assert_eq!(descending(&Value::Int(5), &Value::Int(5)), Ordering::Equal);
    }
}
