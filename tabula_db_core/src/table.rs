use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SchemaError;
use crate::types::Row;
use crate::types::cell::{Cell, cell_to_string, convert_cell};
use crate::types::column_type::ColumnType;

/// An in-memory table: a schema of named, typed columns plus row storage.
///
/// The schema is kept as two parallel sequences (`columns` and `types`)
/// whose pairing at index `i` defines column `i`. Row 0 is the template
/// row: it is materialized from per-type defaults as soon as the first
/// column is added, serves as the reference for type-checking every later
/// row, and is never surfaced as data (see [`Table::data_rows`]).
///
/// Not synchronized. A table shared across threads needs one external
/// exclusive lock held for the duration of each call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table with an empty schema and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column to the schema.
    ///
    /// Adding the first column to a rowless table materializes the template
    /// row. Every row, template included, gains a trailing cell holding the
    /// type's default value.
    pub fn add_column(&mut self, name: impl Into<String>, ctype: ColumnType) {
        let name = name.into();
        debug!(column = %name, ctype = %ctype, "add column");
        self.columns.push(name);
        self.types.push(ctype);
        if self.rows.is_empty() {
            self.rows.push(Row::new());
        }
        for row in &mut self.rows {
            row.push(Cell::default_for(ctype));
        }
    }

    /// Appends a row after tag-checking every cell against the template
    /// row's cells at the same index.
    ///
    /// When the table holds no rows at all the check is vacuous and the row
    /// is accepted as-is: the very first row appended to a columnless table
    /// is only ever checked against itself, and becomes the reference for
    /// every row after it. This asymmetry is intentional.
    pub fn add_row(&mut self, row: Row) -> Result<(), SchemaError> {
        if let Some(template) = self.rows.first() {
            if row.len() != template.len() {
                return Err(SchemaError::IndexOutOfRange {
                    index: row.len(),
                    len: template.len(),
                });
            }
            for (i, (cell, reference)) in row.iter().zip(template).enumerate() {
                let expected = reference.column_type();
                let actual = cell.column_type();
                if actual != expected {
                    return Err(SchemaError::TypeMismatch {
                        column: i,
                        expected,
                        actual,
                        value: cell_to_string(cell),
                    });
                }
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Replaces the name of column `index`. Types, rows, and every other
    /// name are untouched.
    pub fn rename_column(
        &mut self,
        index: usize,
        new_name: impl Into<String>,
    ) -> Result<(), SchemaError> {
        let len = self.columns.len();
        let slot = self
            .columns
            .get_mut(index)
            .ok_or(SchemaError::IndexOutOfRange { index, len })?;
        *slot = new_name.into();
        Ok(())
    }

    /// Changes the declared type of column `index`, migrating every stored
    /// cell, all-or-nothing.
    ///
    /// The migration runs on a staging clone of the whole table: the column
    /// is retyped, the template cell is reset to the new type's default, and
    /// each data row's cell is passed through [`convert_cell`]. Only when
    /// every row converts is the staging table swapped in; on any failure
    /// the clone is dropped and the live table is left exactly as it was.
    ///
    /// Conversion is same-tag only, so this succeeds iff every data cell in
    /// the column already holds the requested kind of value.
    pub fn change_column_type(
        &mut self,
        index: usize,
        new_type: ColumnType,
    ) -> Result<(), SchemaError> {
        if index >= self.types.len() {
            return Err(SchemaError::IndexOutOfRange {
                index,
                len: self.types.len(),
            });
        }
        let mut staging = self.clone();
        staging.types[index] = new_type;
        if let Some(template) = staging.rows.first_mut() {
            template[index] = Cell::default_for(new_type);
        }
        for row in staging.rows.iter_mut().skip(1) {
            row[index] = convert_cell(&row[index], new_type)?;
        }
        debug!(index, new_type = %new_type, "column retyped");
        *self = staging;
        Ok(())
    }

    /// Overwrites one cell in place. The new cell must carry the column's
    /// established tag; the reference behavior skipped this check, which
    /// would let a caller silently break the tag invariant `add_row` exists
    /// to protect.
    pub fn update_cell(
        &mut self,
        row_index: usize,
        column_index: usize,
        cell: Cell,
    ) -> Result<(), SchemaError> {
        let expected = self
            .rows
            .first()
            .and_then(|template| template.get(column_index))
            .map(Cell::column_type)
            .ok_or(SchemaError::IndexOutOfRange {
                index: column_index,
                len: self.columns.len(),
            })?;
        let actual = cell.column_type();
        if actual != expected {
            return Err(SchemaError::TypeMismatch {
                column: column_index,
                expected,
                actual,
                value: cell_to_string(&cell),
            });
        }
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(SchemaError::IndexOutOfRange {
                index: row_index,
                len,
            })?;
        row[column_index] = cell;
        Ok(())
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All stored rows, template row included (index 0 once any column or
    /// row exists).
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The rows appended by callers, excluding the template row.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}
