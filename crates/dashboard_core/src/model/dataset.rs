//! Typed projection of a fetched table.
//!
//! # Responsibility
//! - Validate that a table carries the column its record type needs.
//! - Keep the raw table alongside typed records for grid rendering.
//!
//! # Invariants
//! - `records.len() == table.len()`, in row order.
//! - Only the required column is checked; other columns are carried as-is.

use super::entity::EntityKind;
use super::table::{Cell, Table};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when a fetched table lacks a column its record type requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    MissingColumn {
        entity: EntityKind,
        column: &'static str,
    },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn { entity, column } => {
                write!(f, "table `{entity}` has no `{column}` column")
            }
        }
    }
}

impl Error for SchemaError {}

/// Nominal record projected from a single required column of a row.
pub trait Record: Sized {
    const ENTITY: EntityKind;
    const REQUIRED_COLUMN: &'static str;

    fn from_cell(cell: &Cell) -> Self;
}

/// A fetched table plus one typed record per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    table: Table,
    records: Vec<T>,
}

impl<T: Record> Dataset<T> {
    /// Projects `table` into records of `T`.
    ///
    /// # Errors
    /// - `SchemaError::MissingColumn` when `T::REQUIRED_COLUMN` is absent,
    ///   including for tables with zero rows.
    pub fn from_table(table: Table) -> Result<Self, SchemaError> {
        let index = table
            .column_index(T::REQUIRED_COLUMN)
            .ok_or(SchemaError::MissingColumn {
                entity: T::ENTITY,
                column: T::REQUIRED_COLUMN,
            })?;
        let records = table
            .rows()
            .iter()
            .map(|row| T::from_cell(&row[index]))
            .collect();
        Ok(Self { table, records })
    }
}

impl<T> Dataset<T> {
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
