use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::types::column_type::ColumnType;

/// A single tagged value occupying one column position within one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Int64(i64),
    Text(String),
    Float64(f64),
    Bool(bool),
    Uint64(u64),
    Byte(u8),
    Rune(char),
}

impl Cell {
    /// Runtime tag of this cell.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Int64(_) => ColumnType::Int64,
            Cell::Text(_) => ColumnType::Text,
            Cell::Float64(_) => ColumnType::Float64,
            Cell::Bool(_) => ColumnType::Bool,
            Cell::Uint64(_) => ColumnType::Uint64,
            Cell::Byte(_) => ColumnType::Byte,
            Cell::Rune(_) => ColumnType::Rune,
        }
    }

    /// Canonical default value per column type. Exhaustive on purpose so a
    /// new ColumnType variant cannot ship without a default.
    pub fn default_for(ctype: ColumnType) -> Cell {
        match ctype {
            ColumnType::Int64 => Cell::Int64(0),
            ColumnType::Text => Cell::Text("a".to_string()),
            ColumnType::Float64 => Cell::Float64(0.0),
            ColumnType::Bool => Cell::Bool(false),
            ColumnType::Uint64 => Cell::Uint64(0),
            ColumnType::Byte => Cell::Byte(0),
            ColumnType::Rune => Cell::Rune('\0'),
        }
    }
}

/// Re-wraps `cell` as `target` when the runtime tag already matches.
///
/// Cross-tag requests fail: no string parsing, no numeric widening or
/// narrowing. A column-type migration therefore only succeeds for cells
/// that already hold the requested kind of value.
pub fn convert_cell(cell: &Cell, target: ColumnType) -> Result<Cell, SchemaError> {
    match (target, cell) {
        (ColumnType::Int64, Cell::Int64(n)) => Ok(Cell::Int64(*n)),
        (ColumnType::Text, Cell::Text(s)) => Ok(Cell::Text(s.clone())),
        (ColumnType::Float64, Cell::Float64(x)) => Ok(Cell::Float64(*x)),
        (ColumnType::Bool, Cell::Bool(b)) => Ok(Cell::Bool(*b)),
        (ColumnType::Uint64, Cell::Uint64(n)) => Ok(Cell::Uint64(*n)),
        (ColumnType::Byte, Cell::Byte(b)) => Ok(Cell::Byte(*b)),
        (ColumnType::Rune, Cell::Rune(c)) => Ok(Cell::Rune(*c)),
        (to, other) => Err(SchemaError::UnconvertibleType {
            value: cell_to_string(other),
            from: other.column_type(),
            to,
        }),
    }
}

/// Parses a display token into a cell of the requested type. This is the
/// caller-boundary path; the engine itself never parses values.
pub fn parse_cell(ctype: ColumnType, token: &str) -> Result<Cell, SchemaError> {
    let unconvertible = || SchemaError::UnconvertibleType {
        value: token.to_string(),
        from: ColumnType::Text,
        to: ctype,
    };
    match ctype {
        ColumnType::Int64 => token
            .parse()
            .map(Cell::Int64)
            .map_err(|_| unconvertible()),
        ColumnType::Text => Ok(Cell::Text(token.to_string())),
        ColumnType::Float64 => token
            .parse()
            .map(Cell::Float64)
            .map_err(|_| unconvertible()),
        ColumnType::Bool => match token.to_lowercase().as_str() {
            "true" | "1" => Ok(Cell::Bool(true)),
            "false" | "0" => Ok(Cell::Bool(false)),
            _ => Err(unconvertible()),
        },
        ColumnType::Uint64 => token
            .parse()
            .map(Cell::Uint64)
            .map_err(|_| unconvertible()),
        ColumnType::Byte => token.parse().map(Cell::Byte).map_err(|_| unconvertible()),
        ColumnType::Rune => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Cell::Rune(c)),
                _ => Err(unconvertible()),
            }
        }
    }
}

pub fn cell_to_string(cell: &Cell) -> String {
    match cell {
        Cell::Int64(n) => n.to_string(),
        Cell::Text(s) => s.clone(),
        Cell::Float64(x) => x.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::Uint64(n) => n.to_string(),
        Cell::Byte(b) => b.to_string(),
        Cell::Rune(c) => c.to_string(),
    }
}
