use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The closed set of value kinds a column may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Int64,
    Text,
    Float64,
    Bool,
    Uint64,
    Byte,
    Rune,
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Text => "text",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::Uint64 => "uint64",
            ColumnType::Byte => "byte",
            ColumnType::Rune => "rune",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn parse_column_type(s: &str) -> Result<ColumnType, SchemaError> {
    match s.to_lowercase().as_str() {
        "int64" => Ok(ColumnType::Int64),
        "text" | "string" => Ok(ColumnType::Text),
        "float64" => Ok(ColumnType::Float64),
        "bool" => Ok(ColumnType::Bool),
        "uint64" => Ok(ColumnType::Uint64),
        "byte" => Ok(ColumnType::Byte),
        "rune" => Ok(ColumnType::Rune),
        other => Err(SchemaError::UnknownType(other.to_string())),
    }
}
