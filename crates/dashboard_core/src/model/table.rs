//! In-memory tabular snapshot of one query result.
//!
//! # Invariants
//! - Column order matches the order reported by the database schema.
//! - Every row holds exactly `columns.len()` cells.

use rusqlite::types::ValueRef;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One cell value, mirroring SQLite storage classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<ValueRef<'_>> for Cell {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(value) => Self::Integer(value),
            ValueRef::Real(value) => Self::Real(value),
            ValueRef::Text(bytes) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Self::Blob(bytes.to_vec()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// Ordered rows of uniformly shaped cells with named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends one row.
    ///
    /// Short rows are padded with `Cell::Null`; extra cells are dropped so the
    /// table stays rectangular.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of `name`, matched exactly as the schema spells it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Table};

    #[test]
    fn push_row_keeps_table_rectangular() {
        let mut table = Table::new(vec!["id".to_string(), "name".to_string()]);
        table.push_row(vec![Cell::Integer(1)]);
        table.push_row(vec![Cell::Integer(2), "Bo".into(), "extra".into()]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec![Cell::Integer(1), Cell::Null]);
        assert_eq!(table.rows()[1], vec![Cell::Integer(2), Cell::from("Bo")]);
    }

    #[test]
    fn column_index_is_case_sensitive() {
        let table = Table::new(vec!["Name".to_string(), "name".to_string()]);
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("NAME"), None);
    }

    #[test]
    fn cells_display_as_plain_text() {
        assert_eq!(Cell::Null.to_string(), "");
        assert_eq!(Cell::Integer(7).to_string(), "7");
        assert_eq!(Cell::Real(1.5).to_string(), "1.5");
        assert_eq!(Cell::from("Amy").to_string(), "Amy");
        assert_eq!(Cell::Blob(vec![1, 2, 3]).to_string(), "<3 bytes>");
    }
}
