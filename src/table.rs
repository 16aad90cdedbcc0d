// src/table.rs
//! Typed, column-oriented staff table.
//!
//! Row order is the order rows had after normalization; ranking relies on it
//! as the tie-break, so nothing in here ever reorders rows.

use std::fmt;

use crate::attributes::{self, NAME};

/// One cell, as handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    Missing,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn value(&self, row: usize) -> Value {
        match self {
            ColumnData::Int(v) => match v.get(row) {
                Some(Some(x)) => Value::Int(*x),
                _ => Value::Missing,
            },
            ColumnData::Text(v) => match v.get(row) {
                Some(s) => Value::Text(s.clone()),
                None => Value::Missing,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn int(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self { name: name.into(), data: ColumnData::Int(values) }
    }

    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), data: ColumnData::Text(values) }
    }

    pub fn ints(&self) -> Option<&[Option<i64>]> {
        match &self.data {
            ColumnData::Int(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffTable {
    columns: Vec<Column>,
    len: usize,
}

impl StaffTable {
    /// Build from columns of equal length. Columns shorter than the first
    /// are padded (missing / empty text) so the table stays rectangular.
    pub fn from_columns(mut columns: Vec<Column>) -> Self {
        let len = columns.iter().map(|c| c.data.len()).max().unwrap_or(0);
        for col in &mut columns {
            match &mut col.data {
                ColumnData::Int(v) => v.resize(len, None),
                ColumnData::Text(v) => v.resize(len, s!()),
            }
        }
        Self { columns, len }
    }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Integer column by name; None when absent or text-typed.
    pub fn ints(&self, name: &str) -> Option<&[Option<i64>]> {
        self.column(name).and_then(Column::ints)
    }

    /// Attribute-vocabulary columns present, in table order.
    pub fn attribute_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .filter(|n| attributes::is_attribute(n))
            .collect()
    }

    /// Replace the column with this name, or append it when new.
    pub fn set_int_column(&mut self, name: &str, mut values: Vec<Option<i64>>) {
        values.resize(self.len, None);
        let col = Column::int(name, values);
        match self.position(name) {
            Some(ix) => self.columns[ix] = col,
            None => self.columns.push(col),
        }
    }

    pub fn value(&self, row: usize, column: usize) -> Value {
        self.columns
            .get(column)
            .map(|c| c.data.value(row))
            .unwrap_or(Value::Missing)
    }

    pub fn record(&self, row: usize) -> Option<StaffRecord<'_>> {
        (row < self.len).then_some(StaffRecord { table: self, row })
    }

    pub fn records(&self) -> impl Iterator<Item = StaffRecord<'_>> + '_ {
        (0..self.len).map(move |row| StaffRecord { table: self, row })
    }
}

/// Borrowed view of one staff member.
#[derive(Clone, Copy, Debug)]
pub struct StaffRecord<'a> {
    table: &'a StaffTable,
    row: usize,
}

impl<'a> StaffRecord<'a> {
    pub fn index(&self) -> usize { self.row }

    pub fn name(&self) -> &'a str {
        self.text(NAME).unwrap_or("")
    }

    /// Integer cell of an attribute or derived metric column.
    pub fn int(&self, column: &str) -> Option<i64> {
        self.table.ints(column).and_then(|v| v.get(self.row).copied().flatten())
    }

    pub fn text(&self, column: &str) -> Option<&'a str> {
        match &self.table.column(column)?.data {
            ColumnData::Text(v) => v.get(self.row).map(String::as_str),
            ColumnData::Int(_) => None,
        }
    }

    pub fn get(&self, column: &str) -> Option<Value> {
        self.table.column(column).map(|c| c.data.value(self.row))
    }
}
