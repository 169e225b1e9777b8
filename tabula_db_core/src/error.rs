use thiserror::Error;

use crate::types::column_type::ColumnType;

/// Everything the table engine can report to its caller. Each variant
/// carries enough context to render a human-readable message; the engine
/// never logs or retries on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A column-type name outside the closed set. Only reachable from the
    /// textual parse boundary; the engine works on the closed enum.
    #[error("unknown column type '{0}'; use int64|text|float64|bool|uint64|byte|rune")]
    UnknownType(String),

    /// A cell's runtime tag disagrees with the column's established type.
    #[error(
        "invalid type of value '{value}' at column {column}: '{value}' is a '{actual}' but should be a '{expected}'"
    )]
    TypeMismatch {
        column: usize,
        expected: ColumnType,
        actual: ColumnType,
        value: String,
    },

    /// A column-type change would require converting a value across tags,
    /// which the engine does not do.
    #[error("no conversion available for '{value}' from '{from}' to '{to}'")]
    UnconvertibleType {
        value: String,
        from: ColumnType,
        to: ColumnType,
    },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
